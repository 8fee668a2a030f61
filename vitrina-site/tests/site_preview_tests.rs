use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vitrina_core::carousel::Key;
use vitrina_core::config::{CarouselSettings, DataSource, EnvOverrides};
use vitrina_core::{CarouselKey, SiteConfig};
use vitrina_site::app::{AppConfig, ConfigSource, contact_lines, preview};
use vitrina_site::cli::{Cli, Command};
use vitrina_site::sections::{Section, Site};

fn bundled_data() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn config_for(root: &Path) -> AppConfig {
    AppConfig {
        site: SiteConfig {
            data: DataSource::Directory {
                root: root.to_path_buf(),
            },
            ..SiteConfig::default()
        },
        source: ConfigSource::Defaults,
    }
}

#[tokio::test]
async fn bundled_content_renders_every_section() {
    let config = config_for(bundled_data());
    let blocks = preview(&config.loader().expect("loader"), &config, &Section::ALL)
        .await
        .expect("preview");

    assert_eq!(blocks.len(), 5);
    assert!(blocks[0].contains("01/04"));
    assert!(blocks[0].contains("> [+0] San Marco"));
    // The fetched trend sits in front of the four placeholders.
    assert!(blocks[1].contains("01/05"));
    assert!(blocks[1].contains("> [+0] Culorile anului 2025"));
    assert!(blocks[2].contains("01/05"));
    // Only featured entries make the strips.
    assert!(blocks[3].contains("01/02"));
    assert!(!blocks[3].contains("Grassello"));
    assert!(blocks[4].contains("01/03"));
}

#[tokio::test]
async fn missing_documents_degrade_per_section() {
    let empty = TempDir::new().expect("tempdir");
    let config = config_for(empty.path());
    let blocks = preview(
        &config.loader().expect("loader"),
        &config,
        &[Section::Hero, Section::Trends, Section::Products],
    )
    .await
    .expect("preview");

    assert!(blocks[0].contains("Nu s-au putut încărca slide-urile"));
    assert!(blocks[1].contains("01/04"));
    assert!(blocks[1].contains("Coming Soon"));
    assert!(blocks[2].contains("Eroare la încărcarea produselor"));
}

#[tokio::test]
async fn empty_featured_list_is_not_an_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("categories.json"), "[]").expect("write");
    let config = config_for(dir.path());
    let blocks = preview(&config.loader().expect("loader"), &config, &[Section::Categories])
        .await
        .expect("preview");
    assert!(blocks[0].ends_with("Nimic de afișat"));
}

#[test]
fn cli_flags_override_file_and_environment() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("vitrina.toml");
    fs::write(&path, "[data]\nurl = \"https://cdn.example.ro/data\"\n").expect("write");

    let cli = Cli {
        config: Some(path.clone()),
        env_file: ".env".into(),
        data_dir: Some("local-data".into()),
        data_url: None,
        command: Command::Contact,
    };
    let env = EnvOverrides {
        data_url: Some("http://staging.example.ro/data".into()),
        ..EnvOverrides::default()
    };
    let config = AppConfig::resolve(&cli, &env).expect("resolves");
    assert_eq!(config.source, ConfigSource::File(path));
    assert_eq!(
        config.site.data,
        DataSource::Directory {
            root: "local-data".into()
        }
    );
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    let cli = Cli {
        config: Some("/definitely/not/here.toml".into()),
        env_file: ".env".into(),
        data_dir: None,
        data_url: None,
        command: Command::Contact,
    };
    assert!(AppConfig::resolve(&cli, &EnvOverrides::default()).is_err());
}

#[test]
fn contact_lines_cover_every_channel() {
    let site = SiteConfig::from_toml_str(
        r#"
        [contact]
        phone = "+40 775 319 975"
        email = "sanmarcosector5@yahoo.com"
        address = "Calea Ferentari 23, București"
        "#,
    )
    .expect("parses");
    let lines = contact_lines(site.contact.as_ref().expect("contact")).expect("valid");
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("tel:+40775319975"));
    assert!(lines[1].ends_with("https://wa.me/40775319975"));
    assert!(lines[2].ends_with("mailto:sanmarcosector5@yahoo.com"));
    assert!(lines[3].starts_with("map"));
}

#[test]
fn sections_map_to_distinct_carousels() {
    let keys: Vec<CarouselKey> = Section::ALL.iter().map(|s| s.key()).collect();
    for (i, key) in keys.iter().enumerate() {
        assert!(!keys[i + 1..].contains(key));
    }
}

fn without_autoplay() -> CarouselSettings {
    let mut settings = CarouselSettings::default();
    for carousel in [
        &mut settings.hero,
        &mut settings.trends,
        &mut settings.promo,
        &mut settings.products,
        &mut settings.categories,
    ] {
        carousel.autoplay = false;
    }
    settings
}

async fn active_index(site: &Site, section: Section) -> Option<usize> {
    site.flush(section).await.expect("running").active_index
}

#[tokio::test]
async fn arrow_keys_reach_only_the_focused_carousel() {
    let config = config_for(bundled_data());
    let mut site = Site::mount(&config.loader().expect("loader"), &without_autoplay());
    site.settled().await.expect("settles");

    site.focus(Some(Section::Trends)).expect("focus");
    site.key_pressed(Key::ArrowRight).expect("key");
    assert_eq!(active_index(&site, Section::Trends).await, Some(1));
    assert_eq!(active_index(&site, Section::Hero).await, Some(0));

    // With focus gone the page-wide hero takes the key and the deck does not.
    site.focus(None).expect("blur");
    site.key_pressed(Key::ArrowRight).expect("key");
    assert_eq!(active_index(&site, Section::Hero).await, Some(1));
    assert_eq!(active_index(&site, Section::Trends).await, Some(1));
    assert_eq!(active_index(&site, Section::Promo).await, Some(0));

    site.shutdown().await;
}
