// tests/venues.rs
//
// State resolution fallback chain and registry venue codes.
//
use team_resolve::config::options::ResolveOptions;
use team_resolve::lexicon::WordList;
use team_resolve::region::{StateSource, Suburb};
use team_resolve::venue::{RegistryEntry, VenueRecord};
use team_resolve::color::Palette;
use team_resolve::{names, BasicNormalizer, Resolver};

fn suburb(name: &str, state: &str) -> Suburb {
    Suburb { name: name.into(), state: state.into() }
}

fn entry(name: &str, state: &str, code: &str) -> RegistryEntry {
    RegistryEntry { name: name.into(), state: state.into(), code: code.into() }
}

fn resolver() -> Resolver {
    Resolver::new(
        Box::new(BasicNormalizer),
        Box::new(WordList::builtin()),
        Palette::css3(),
        vec![
            suburb("Five Dock", "New South Wales"),
            suburb("Sydney", "New South Wales"),
            suburb("North Sydney", "New South Wales"),
            suburb("Richmond", "Victoria"),
            suburb("Subiaco", "Western Australia"),
        ],
        vec![
            entry("Henson Park", "New South Wales", "HEN"),
            entry("North Sydney Oval", "New South Wales", "NSO"),
            entry("Punt Road Oval", "Victoria", "PRO"),
            entry("Subiaco Oval", "Western Australia", "SUB"),
            entry("", "Victoria", "NONAME"),
        ],
        ResolveOptions::default(),
    )
}

#[test]
fn single_region_in_location() {
    let r = resolver();
    let v = VenueRecord::named("Five Dock Park").at("five dock, new south wales");
    assert_eq!(
        r.resolve_state_with_source(&v),
        Some(("new south wales".to_string(), StateSource::Location))
    );
}

#[test]
fn url_is_tried_after_location() {
    let r = resolver();
    let v = VenueRecord::named("Somewhere")
        .at("out past the river")
        .with_url("https://example.org/wiki/Western_Australia/Grounds");
    assert_eq!(
        r.resolve_state_with_source(&v),
        Some(("western australia".to_string(), StateSource::Url))
    );
}

#[test]
fn suburb_in_location_prefers_longest_name() {
    let r = resolver();
    let v = VenueRecord::named("North Sydney Oval").at("Miller St, North Sydney");
    assert_eq!(
        r.resolve_state_with_source(&v),
        Some(("new south wales".to_string(), StateSource::Suburb))
    );
}

#[test]
fn alias_suburb_is_last_resort() {
    let r = resolver();
    let v = VenueRecord::named("Swinburne Centre").also_known_as("Punt Road Oval, Richmond");
    assert_eq!(
        r.resolve_state_with_source(&v),
        Some(("victoria".to_string(), StateSource::Alias))
    );
}

#[test]
fn nothing_known_is_absent() {
    let r = resolver();
    let v = VenueRecord::named("Mystery Ground").at("the middle of nowhere");
    assert_eq!(r.resolve_state(&v), None);
    assert!(r.resolve_venue_codes(&v).codes.is_empty());
}

#[test]
fn codes_need_matching_state() {
    let r = resolver();
    let mut v = VenueRecord::named("Subiaco Oval").at("Subiaco");
    r.resolve_venue(&mut v);
    assert_eq!(v.state.as_deref(), Some("western australia"));
    assert_eq!(v.codes, names!["SUB"]);

    // right name, wrong state
    let v = VenueRecord::named("Subiaco Oval").at("Richmond");
    let res = r.resolve_venue_codes(&v);
    assert_eq!(res.state.as_deref(), Some("victoria"));
    assert!(res.codes.is_empty());
}

#[test]
fn former_names_collect_codes() {
    let r = resolver();
    let mut v = VenueRecord::named("Punt Road")
        .at("Richmond, Victoria")
        .also_known_as("Punt Road Oval");
    r.resolve_venue(&mut v);
    assert_eq!(v.codes, names!["PRO"]);
}

#[test]
fn venue_records_read_from_json() {
    let json = r#"[{"name": "Henson Park", "location": "Marrickville, New South Wales"},
                   {"name": "Nowhere", "known_as": ["Old Nowhere"]}]"#;
    let venues: Vec<VenueRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(venues[1].known_as, ["Old Nowhere"]);

    let r = resolver();
    let mut first = venues[0].clone();
    r.resolve_venue(&mut first);
    assert_eq!(first.codes, names!["HEN"]);
}
