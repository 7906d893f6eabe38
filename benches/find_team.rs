// benches/find_team.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use team_resolve::color::{Palette, Rgb};
use team_resolve::config::options::MatcherOptions;
use team_resolve::lexicon::WordList;
use team_resolve::matcher::CandidateMatcher;

const CLUBS: &[&str] = &[
    "adelaide crows", "brisbane lions", "carlton", "collingwood", "essendon", "fremantle",
    "geelong cats", "gold coast suns", "greater western sydney giants", "hawthorn", "melbourne",
    "north melbourne", "port adelaide", "richmond", "st kilda", "sydney swans",
    "west coast eagles", "western bulldogs",
];

const PASSAGE: &str = "in the qualifying final the westcoast eagles held off a late charge \
    from colingwood before a record crowd at the ground while the gws giants rested players";

fn bench_find_team(c: &mut Criterion) {
    let words = WordList::builtin();

    let early = CandidateMatcher::new(&words);
    c.bench_function("find_team_early_exit", |b| {
        b.iter(|| black_box(early.find_team(black_box(CLUBS), black_box(PASSAGE))))
    });

    let complete = CandidateMatcher::with_options(&words, MatcherOptions::complete());
    c.bench_function("find_team_complete", |b| {
        b.iter(|| black_box(complete.find_team(black_box(CLUBS), black_box(PASSAGE))))
    });
}

fn bench_nearest_color(c: &mut Criterion) {
    let palette = Palette::css3();
    let samples: Vec<Rgb> = (0..=255u8).step_by(5).map(|v| Rgb::new(v, 255 - v, v / 3)).collect();

    c.bench_function("nearest_color_css3", |b| {
        b.iter(|| {
            for &rgb in &samples {
                black_box(palette.nearest_color_name(black_box(rgb)));
            }
        })
    });
}

criterion_group!(benches, bench_find_team, bench_nearest_color);
criterion_main!(benches);
