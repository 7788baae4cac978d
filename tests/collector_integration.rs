use offer_scraper::{
    Collector, FailurePolicy, Fetcher, HttpFetcher, OfferRecord, OutputFormat, ScrapeError,
    ScraperConfig, SearchQuery, export,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:61.0) Gecko/20100101 Firefox/61.0";

fn listing_page(links: &[String], next: Option<&str>) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<li class="ui-search-layout__item"><a class="ui-search-item__group__element ui-search-link" href="{link}">offer</a></li>"#
            )
        })
        .collect();
    let pagination = next
        .map(|href| {
            format!(r#"<a class="andes-pagination__link ui-search-link" href="{href}">Siguiente</a>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<html><body><ol class="ui-search-layout ui-search-layout--stack">{items}</ol>{pagination}</body></html>"#
    )
}

fn detail_page(price: &str, vendor_href: &str) -> String {
    format!(
        r#"<html><body>
        <span class="andes-money-amount__fraction">{price}</span>
        <a class="ui-pdp-media__action" href="{vendor_href}">vendedor</a>
        </body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> ScraperConfig {
    ScraperConfig {
        root_url: format!("{}/", server.uri()),
        ..ScraperConfig::default()
    }
}

#[tokio::test]
async fn fetch_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxer"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&ScraperConfig::default()).unwrap();
    let body = fetcher
        .fetch(&format!("{}/boxer", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<html></html>");
}

#[tokio::test]
async fn fetch_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nada"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&ScraperConfig::default()).unwrap();
    let err = fetcher
        .fetch(&format!("{}/nada", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::NotFound { .. }));
}

#[tokio::test]
async fn fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxer"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&ScraperConfig::default()).unwrap();
    let err = fetcher
        .fetch(&format!("{}/boxer", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::HttpStatus { status, .. } if status.as_u16() == 500));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn collect_across_pages() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    let page_1: Vec<String> = (1..=3).map(|n| format!("{uri}/MLA-{n}-_JM#pos={n}")).collect();
    let page_2: Vec<String> = (4..=6).map(|n| format!("{uri}/MLA-{n}-_JM#pos={n}")).collect();

    mount_html(&mock_server, "/boxer", listing_page(&page_1, Some("/boxer_Desde_4")), 1).await;
    mount_html(&mock_server, "/boxer_Desde_4", listing_page(&page_2, Some("/boxer_Desde_7")), 1).await;
    mount_html(&mock_server, "/boxer_Desde_7", listing_page(&[], None), 0).await;
    for n in 1..=4 {
        mount_html(
            &mock_server,
            &format!("/MLA-{n}-_JM"),
            detail_page(&format!("{n}.500"), &format!("/perfil/VENDEDOR+{n}")),
            1,
        )
        .await;
    }

    let query = SearchQuery::new("boxer", 4, &format!("{uri}/")).with_strip_tracking(true);
    let collector = Collector::new(query, config_for(&mock_server)).unwrap();

    let records = collector.collect().await.unwrap();

    let expected: Vec<OfferRecord> = (1..=4)
        .map(|n| {
            OfferRecord::new(format!("{uri}/MLA-{n}-_JM"))
                .with_fields(format!("{n}.500"), format!("VENDEDOR {n}"))
        })
        .collect();
    assert_eq!(records, expected);
}

#[tokio::test]
async fn listing_not_found_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inexistente"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = SearchQuery::new("inexistente", 10, &mock_server.uri());
    let collector = Collector::new(query, config_for(&mock_server)).unwrap();

    let err = collector.collect().await.unwrap_err();
    assert!(matches!(err, ScrapeError::NotFound { .. }));
}

#[tokio::test]
async fn skip_policy_exports_remaining_offers() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    let links: Vec<String> = (1..=3).map(|n| format!("{uri}/MLA-{n}")).collect();
    mount_html(&mock_server, "/boxer", listing_page(&links, None), 1).await;
    mount_html(&mock_server, "/MLA-1", detail_page("100", "/perfil/UNO"), 1).await;
    Mock::given(method("GET"))
        .and(path("/MLA-2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/MLA-3", detail_page("300", "/perfil/TRES"), 1).await;

    let config = ScraperConfig {
        failure_policy: FailurePolicy::Skip,
        ..config_for(&mock_server)
    };
    let query = SearchQuery::new("boxer", 10, &config.root_url);
    let collector = Collector::new(query, config).unwrap();

    let records = collector.collect().await.unwrap();
    assert_eq!(records.len(), 2);

    let out = std::env::temp_dir().join(format!("offers-it-{}.csv", std::process::id()));
    export(&records, &out, OutputFormat::Csv).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    std::fs::remove_file(&out).unwrap();

    assert_eq!(
        written,
        format!("link,price,vendor\n{uri}/MLA-1,100,UNO\n{uri}/MLA-3,300,TRES\n")
    );
}
