//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl-and-extract cycle end-to-end through the HTTP renderer.

use contact_harvester::config::{Config, CrawlerConfig, SiteEntry};
use contact_harvester::crawler::{crawl_site, run_crawl};
use contact_harvester::output::{JsonOutput, OutputSink, TextOutput};
use contact_harvester::HttpRenderer;
use std::collections::BTreeSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no pacing delays
fn create_test_config(sites: Vec<String>) -> Config {
    Config {
        crawler: CrawlerConfig {
            batch_size: 5,
            settle_delay: 0,
            batch_delay: 0,
            site_delay: 0,
            navigation_timeout: 5_000,
            include_entry_page: true,
        },
        sites: sites.into_iter().map(|url| SiteEntry { url }).collect(),
        ..Config::default()
    }
}

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into().into_bytes(), "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_single_page_site_end_to_end() {
    let server = MockServer::start().await;
    let site = format!("{}/", server.uri());

    mount_page(
        &server,
        "/",
        r#"<html><body>
            <p>Email contact@biz.com or call 555-123-4567</p>
            <a href="https://facebook.com/biz">Facebook</a>
        </body></html>"#,
    )
    .await;

    let config = create_test_config(vec![site.clone()]);
    let report = run_crawl(&config).await.expect("crawl should run");

    let signals = report.results.get(&site).expect("site should be reported");
    assert_eq!(signals.emails, set(&["contact@biz.com"]));
    assert_eq!(
        signals.social_media,
        set(&["Facebook: https://facebook.com/biz"])
    );
    assert_eq!(signals.phone_numbers, set(&["555-123-4567"]));
}

#[tokio::test]
async fn test_full_crawl_follows_same_site_links() {
    let server = MockServer::start().await;
    let base = server.uri();
    let site = format!("{}/", base);

    mount_page(
        &server,
        "/",
        format!(
            r#"<html><body>
                <nav>
                    <a href="/menu">Menu</a>
                    <a href="{}/contact">Contact</a>
                    <a href="/menu">Menu again</a>
                    <a href="https://other.example/partners">Partners</a>
                </nav>
            </body></html>"#,
            base
        ),
    )
    .await;
    mount_page(
        &server,
        "/menu",
        r#"<html><body><p>Catering: catering@bistro.com</p></body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/contact",
        r#"<html><body>
            <p>(850) 555-0199</p>
            <a href="https://www.instagram.com/bistro">Instagram</a>
            <a href="https://twitter.com/bistro">Twitter</a>
        </body></html>"#,
    )
    .await;

    let config = create_test_config(vec![site.clone()]);
    let report = run_crawl(&config).await.unwrap();

    let signals = report.results.get(&site).unwrap();
    assert_eq!(signals.emails, set(&["catering@bistro.com"]));
    assert_eq!(signals.phone_numbers, set(&["(850) 555-0199"]));
    assert_eq!(
        signals.social_media,
        set(&[
            "Instagram: https://www.instagram.com/bistro",
            "Twitter: https://twitter.com/bistro"
        ])
    );

    assert_eq!(report.statistics.links_harvested, 2);
    assert_eq!(report.statistics.pages_attempted, 3);
    assert_eq!(report.statistics.pages_failed, 0);
}

#[tokio::test]
async fn test_failing_page_does_not_lose_batch_siblings() {
    let server = MockServer::start().await;
    let site = format!("{}/", server.uri());

    mount_page(
        &server,
        "/",
        r#"<a href="/ok">OK</a><a href="/broken">Broken</a><a href="/also-ok">Also OK</a>"#,
    )
    .await;
    mount_page(&server, "/ok", "hours@diner.com").await;
    mount_page(&server, "/also-ok", "407-555-0142").await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = create_test_config(vec![site.clone()]);
    let report = run_crawl(&config).await.unwrap();

    let signals = report.results.get(&site).unwrap();
    assert_eq!(signals.emails, set(&["hours@diner.com"]));
    assert_eq!(signals.phone_numbers, set(&["407-555-0142"]));
    assert_eq!(report.statistics.pages_failed, 1);
}

#[tokio::test]
async fn test_multiple_sites_keep_results_separate() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    let first_site = format!("{}/", first.uri());
    let second_site = format!("{}/", second.uri());

    mount_page(&first, "/", "first@one.com").await;
    mount_page(&second, "/", "second@two.com").await;

    let config = create_test_config(vec![first_site.clone(), second_site.clone()]);
    let report = run_crawl(&config).await.unwrap();

    assert_eq!(
        report.results.sites().collect::<Vec<_>>(),
        vec![first_site.as_str(), second_site.as_str()]
    );
    assert_eq!(
        report.results.get(&first_site).unwrap().emails,
        set(&["first@one.com"])
    );
    assert_eq!(
        report.results.get(&second_site).unwrap().emails,
        set(&["second@two.com"])
    );
}

#[tokio::test]
async fn test_unreachable_entry_page_reports_empty_site() {
    let server = MockServer::start().await;
    let site = format!("{}/", server.uri());

    // No mocks mounted: wiremock answers 404
    let config = create_test_config(vec![site.clone()]);
    let renderer = HttpRenderer::launch(&config.renderer, &config.user_agent).unwrap();
    let crawl = crawl_site(&renderer, &site, &config.crawler).await;

    assert!(crawl.signals.is_empty());
    assert_eq!(crawl.pages_failed, 1);
    assert_eq!(crawl.failures[0].0, site);
}

#[tokio::test]
async fn test_report_formats() {
    let server = MockServer::start().await;
    let site = format!("{}/", server.uri());
    mount_page(&server, "/", "hello@cafe.com 555-123-4567").await;

    let config = create_test_config(vec![site.clone()]);
    let report = run_crawl(&config).await.unwrap();

    let mut text = TextOutput::new(Vec::new());
    text.write_report(&report).unwrap();
    let text = String::from_utf8(text.into_inner()).unwrap();
    assert_eq!(
        text,
        format!(
            "Website: {}\nEmails: hello@cafe.com\nSocial Media: \nPhone Numbers: 555-123-4567\n\n",
            site
        )
    );

    let mut json = JsonOutput::new(Vec::new());
    json.write_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json.into_inner()).unwrap();
    assert_eq!(value["sites"][0]["site"], site.as_str());
    assert_eq!(value["statistics"]["sites"], 1);
}
