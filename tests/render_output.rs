// tests/render_output.rs
mod common;

use std::fs;

use common::{USER, site, tmp_dir};
use douban_scrape::Record;
use douban_scrape::config::options::CollectOptions;
use douban_scrape::render::{count_blocks, render, render_to_path};
use douban_scrape::scrape::collect;
use douban_scrape::store::{load_records, save_records};

#[test]
fn blocks_follow_input_order() {
    let records: Vec<Record> = (0..5)
        .map(|i| Record::new(i.to_string(), format!("片名{i}"), format!("https://movie.douban.com/subject/{i}/"), ""))
        .collect();
    let html = render(&records);

    assert_eq!(count_blocks(&html), 5);
    let positions: Vec<usize> = (0..5).map(|i| html.find(&format!("<h2>片名{i} ()</h2>")).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_input_writes_valid_empty_document() {
    let dir = tmp_dir("render_empty");
    let path = dir.join("reviews.html");
    render_to_path(&[], &path).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>你的影评</h1>"));
    assert!(html.contains("</body>"));
    assert_eq!(count_blocks(&html), 0);
}

#[test]
fn collect_save_load_render_pipeline() {
    let dir = tmp_dir("pipeline");
    let json = dir.join("reviews.json");
    let html_path = dir.join("out").join("reviews.html");

    let mut fx = site(3);
    let records = collect(&mut fx, &CollectOptions::new(USER), None).unwrap();
    save_records(&json, &records).unwrap();

    let loaded = load_records(&json).unwrap();
    let written = render_to_path(&loaded, &html_path).unwrap();
    assert_eq!(written, html_path);

    let html = fs::read_to_string(&html_path).unwrap();
    assert_eq!(count_blocks(&html), 6);
    assert!(html.contains("<h2>电影0甲 (2001)</h2>"));
    assert!(html.contains("<h3>Movie 0 A</h3>"));
    assert!(html.contains(r#"<p class="rating">★★★★☆</p>"#));
    assert!(html.contains(r#"<p class="date">Date: 2024-05-01</p>"#));
    assert!(!html.contains("<img"), "posters were not requested");
}

#[test]
fn render_into_a_file_path_that_is_a_dir_fails() {
    let dir = tmp_dir("render_blocked");
    assert!(render_to_path(&[], &dir).is_err());
}
