// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use douban_scrape::driver::FixtureDriver;

pub const USER: &str = "alice";
pub const ORIGIN: &str = "https://movie.douban.com";

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("douban_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Absolute URL of listing page `n` (0-based), 15 entries per page.
pub fn page_url(n: usize) -> String {
    if n == 0 {
        format!("{ORIGIN}/people/{USER}/collect")
    } else {
        format!("{ORIGIN}/people/{USER}/collect?start={}&sort=time", n * 15)
    }
}

fn page_href(n: usize) -> String {
    format!("/people/{USER}/collect?start={}&amp;sort=time", n * 15)
}

/// One listing entry as the site marks it up.
pub struct Entry {
    pub cid: String,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub rating_class: Option<String>,
    pub date: Option<String>,
    pub comment: Option<String>,
    pub poster: Option<String>,
}

impl Entry {
    pub fn new(cid: &str, title: &str) -> Self {
        Self {
            cid: cid.to_owned(),
            title: Some(title.to_owned()),
            intro: Some("2001-07-20(日本) / 宫崎骏".to_owned()),
            rating_class: Some("rating4-t".to_owned()),
            date: Some("2024-05-01".to_owned()),
            comment: None,
            poster: None,
        }
    }

    pub fn poster(mut self, src: &str) -> Self {
        self.poster = Some(src.to_owned());
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.comment = Some(text.to_owned());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    fn html(&self) -> String {
        let mut out = format!(r#"<div class="item comment-item" data-cid="{}">"#, self.cid);
        if let Some(src) = &self.poster {
            out.push_str(&format!(
                r#"<div class="pic"><a href="https://movie.douban.com/subject/{0}/" class="nbg"><img alt="" src="{1}"></a></div>"#,
                self.cid, src
            ));
        }
        out.push_str(r#"<div class="info"><ul>"#);
        if let Some(title) = &self.title {
            out.push_str(&format!(
                r#"<li class="title"><a href="https://movie.douban.com/subject/{}/"><em>{}</em></a></li>"#,
                self.cid, title
            ));
        }
        if let Some(intro) = &self.intro {
            out.push_str(&format!(r#"<li class="intro">{intro}</li>"#));
        }
        out.push_str("<li>");
        if let Some(class) = &self.rating_class {
            out.push_str(&format!(r#"<span class="{class}"></span>&nbsp;&nbsp;"#));
        }
        if let Some(date) = &self.date {
            out.push_str(&format!(r#"<span class="date">{date}</span>"#));
        }
        out.push_str("</li>");
        if let Some(comment) = &self.comment {
            out.push_str(&format!(r#"<li><span class="comment">{comment}</span></li>"#));
        }
        out.push_str("</ul></div></div>\n");
        out
    }
}

/// Full listing page `n`; `has_next` adds the paginator's "next" link to page `n + 1`.
pub fn listing_page(n: usize, entries: &[Entry], has_next: bool) -> String {
    let mut body = String::from(r#"<html><body><div class="grid-view">"#);
    for e in entries {
        body.push_str(&e.html());
    }
    body.push_str(r#"</div><div class="paginator">"#);
    body.push_str(&format!(r#"<span class="thispage">{}</span>"#, n + 1));
    if has_next {
        body.push_str(&format!(r#"<span class="next"><a href="{}">后页&gt;</a></span>"#, page_href(n + 1)));
    } else {
        body.push_str(r#"<span class="next">后页&gt;</span>"#);
    }
    body.push_str("</div></body></html>");
    body
}

/// A fixture site of `pages` listing pages, two entries each, ids `p{page}e{k}`.
pub fn site(pages: usize) -> FixtureDriver {
    let mut fx = FixtureDriver::new();
    for n in 0..pages {
        let entries = [
            Entry::new(&format!("p{n}e0"), &format!("电影{n}甲 / Movie {n} A")),
            Entry::new(&format!("p{n}e1"), &format!("电影{n}乙")),
        ];
        fx = fx.with_page(&page_url(n), listing_page(n, &entries, n + 1 < pages));
    }
    fx
}
