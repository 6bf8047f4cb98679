// src/config/consts.rs

// Site
pub const ORIGIN: &str = "https://movie.douban.com";
pub const PEOPLE_PATH: &str = "/people/";
pub const COLLECT_PATH: &str = "/collect";

// Listing markup
pub const ENTRY_SELECTOR: &str = ".item.comment-item";
pub const ENTRY_ID_ATTR: &str = "data-cid";
pub const TITLE_ANCHOR_SELECTOR: &str = ".title a";
pub const INTRO_SELECTOR: &str = ".intro";
pub const RATING_SELECTOR: &str = r#"span[class^="rating"]"#;
pub const RATING_CLASS_PREFIX: &str = "rating";
pub const RATING_CLASS_SEP: char = '-';
pub const DATE_SELECTOR: &str = ".date";
pub const COMMENT_SELECTOR: &str = ".comment";
pub const POSTER_SELECTOR: &str = ".pic img";
pub const NEXT_PAGE_SELECTOR: &str = ".paginator .next a";

// Free-text fields
pub const FIELD_SEP: &str = " / ";
pub const MAX_STARS: u8 = 5;

// Net
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

// Output
pub const DEFAULT_JSON_FILE: &str = "reviews.json";
pub const DEFAULT_HTML_FILE: &str = "reviews.html";
pub const JSON_INDENT: &[u8] = b"    ";
pub const DOC_TITLE: &str = "Douban Movie Reviews";
pub const DOC_HEADING: &str = "你的影评";
