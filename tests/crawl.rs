//! Crawling against a local mock server: article discovery, page parsing and
//! raw/meta persistence.
use url::Url;

use vestnik::corpus::validate_dataset;
use vestnik::crawler::{ArticleParser, Crawler};

const ARTICLE_PAGE: &str = r#"<html><body>
    <h1>Найден новый вид бактерий</h1>
    <span class="date">18.03.2022</span>
    <div class="sublink">
        <a href="/authors/ivanov">Иван Иванов</a>
        <a href="/themes/biology">Биология</a>
    </div>
    <div class="memo">
        <p>Первый абзац статьи.</p>
        <p>Второй абзац статьи.</p>
        <p>Источник: Журнал Nature.</p>
    </div>
    </body></html>"#;

#[test]
fn crawl_and_persist_article() {
    let mut server = mockito::Server::new();

    let seed_body = format!(
        r#"<html><body>
        <a class="nohover" href="{0}/novosti_nauki/434100">Первая</a>
        <a class="nohover" href="{0}/novosti_nauki/434100">Дубль</a>
        <a class="nohover" href="{0}/nauchno-populyarnaya_biblioteka/1">Библиотека</a>
        </body></html>"#,
        server.url()
    );
    let _seed = server
        .mock("GET", "/news")
        .with_header("content-type", "text/html")
        .with_body(seed_body)
        .create();
    let _article = server
        .mock("GET", "/novosti_nauki/434100")
        .with_header("content-type", "text/html")
        .with_body(ARTICLE_PAGE)
        .create();

    let seed = Url::parse(&format!("{}/news", server.url())).unwrap();
    let mut crawler = Crawler::new(vec![seed], 5);
    crawler.find_articles();

    // the duplicate and the library link are dropped
    assert_eq!(crawler.urls().len(), 1);

    let parser = ArticleParser::new(crawler.client(), crawler.urls()[0].clone(), 1);
    let article = parser.parse().unwrap();
    assert_eq!(article.title(), "Найден новый вид бактерий");
    assert_eq!(article.author(), "Иван Иванов");
    assert_eq!(article.text(), "Первый абзац статьи.\nВторой абзац статьи.");

    let dir = tempfile::tempdir().unwrap();
    article.save_raw(dir.path()).unwrap();
    validate_dataset(dir.path()).unwrap();
}

#[test]
fn failing_seed_is_skipped() {
    let mut server = mockito::Server::new();
    let _seed = server.mock("GET", "/news").with_status(500).create();

    let seed = Url::parse(&format!("{}/news", server.url())).unwrap();
    let mut crawler = Crawler::new(vec![seed], 5);
    crawler.find_articles();

    assert!(crawler.urls().is_empty());
}
