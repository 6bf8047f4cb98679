// src/macros.rs

/// `s!()` → empty `String`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($expr:expr) => { ::std::string::String::from($expr) };
}

/// Concatenate string slices into a fresh `String` (URLs, file names).
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
