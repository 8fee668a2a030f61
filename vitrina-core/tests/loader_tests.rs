use std::fs;

use serde::Deserialize;
use tempfile::TempDir;
use vitrina_core::loader::{DirectorySource, StaticSource};
use vitrina_core::{LoadError, ResourceLoader};
use vitrina_model::{HeroSlide, MediaKind, Trend};

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("hero_slides.json"),
        r#"[{
            "slug": "slide-1",
            "media": { "type": "video", "url": "/videos/hero.mp4" },
            "heading_primary": "San Marco",
            "heading_secondary": "Arta culorilor italiene",
            "category_label": "Decorative",
            "target_url": "/san-marco-arta-culorilor.html"
        }]"#,
    )
    .expect("write hero");
    fs::create_dir(dir.path().join("nested")).expect("mkdir");
    fs::write(dir.path().join("nested/item.json"), r#"{"name": "inner"}"#).expect("write");
    fs::write(dir.path().join("trends.json"), "{ not json").expect("write trends");
    dir
}

#[tokio::test]
async fn directory_source_decodes_documents() {
    let dir = fixture();
    let loader = ResourceLoader::new(DirectorySource::new(dir.path()));

    let slides: Vec<HeroSlide> = loader.fetch("hero_slides.json").await.expect("decodes");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].media.kind, MediaKind::Video);

    let nested: Named = loader.fetch("/nested/item.json").await.expect("nested");
    assert_eq!(nested.name, "inner");
}

#[tokio::test]
async fn directory_source_reports_each_failure_kind() {
    let dir = fixture();
    let loader = ResourceLoader::new(DirectorySource::new(dir.path()));

    let missing = loader.fetch::<Vec<HeroSlide>>("products_featured.json").await;
    assert!(matches!(missing, Err(LoadError::NotFound(_))));

    let escaped = loader.fetch::<Vec<HeroSlide>>("../etc/passwd").await;
    assert!(matches!(escaped, Err(LoadError::InvalidPath(_))));

    let broken = loader.load::<Trend>("trends.json").await;
    assert!(matches!(broken.error(), Some(LoadError::Decode(_))));
    assert!(broken.data().is_none());
}

#[tokio::test]
async fn watch_settles_once_per_fetch() {
    let loader = ResourceLoader::new(StaticSource::new().with("categories.json", "[]"));
    let mut rx = loader.watch::<Vec<Named>>("categories.json");
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.expect("one terminal state");
    assert_eq!(rx.borrow().data().map(Vec::len), Some(0));
    assert!(rx.changed().await.is_err());
}
