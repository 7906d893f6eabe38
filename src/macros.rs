// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! names {
    // Ordered set of owned names, e.g. candidate sets and match results.
    () => {
        ::std::collections::BTreeSet::<::std::string::String>::new()
    };
    ($($name:expr),+ $(,)?) => {{
        let mut set = ::std::collections::BTreeSet::<::std::string::String>::new();
        $(
            set.insert(::std::string::String::from($name));
        )+
        set
    }};
}
