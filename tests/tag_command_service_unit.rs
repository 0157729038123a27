use std::sync::Arc;

mod support;

use support::{FailingTagRepo, InMemoryTagRepo};
use tag_slug::application::commands::tags::{
    CreateTagCommand, RenameTagCommand, TagCommandService,
};
use tag_slug::application::error::ApplicationError;
use tag_slug::application::ports::util::SlugGenerator;
use tag_slug::config::SlugConfig;
use tag_slug::domain::errors::DomainError;
use tag_slug::infrastructure::util::DefaultSlugGenerator;
use tag_slug::{Separator, Slug, Slugifier};

fn service_with(repo: Arc<InMemoryTagRepo>, slugifier: Slugifier) -> TagCommandService {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::new(slugifier));
    TagCommandService::new(repo, slugger)
}

#[tokio::test]
async fn create_persists_slug_derived_from_name() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new());

    let dto = service
        .create_tag(CreateTagCommand::new("Café Déjà Vu"))
        .await
        .expect("create should succeed");

    assert_eq!(dto.name, "Café Déjà Vu");
    assert_eq!(dto.slug, "cafe-deja-vu");
    let stored = repo.stored(dto.id).expect("tag stored");
    assert_eq!(stored.slug, "cafe-deja-vu");
}

#[tokio::test]
async fn create_uses_configured_separator() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let slugifier = Slugifier::new().with_separator(Separator::new('_').unwrap());
    let service = service_with(Arc::clone(&repo), slugifier);

    let dto = service
        .create_tag(CreateTagCommand::new("Hello World"))
        .await
        .unwrap();
    assert_eq!(dto.slug, "hello_world");
}

#[tokio::test]
async fn create_with_locale_applies_locale_table() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new().with_builtin_tables());

    let german = service
        .create_tag(CreateTagCommand::new("Müller").with_locale("de_DE"))
        .await
        .unwrap();
    let plain = service
        .create_tag(CreateTagCommand::new("Müller"))
        .await
        .unwrap();

    assert_eq!(german.slug, "mueller");
    assert_eq!(german.locale.as_deref(), Some("de-de"));
    assert_eq!(plain.slug, "muller");
    assert_eq!(plain.locale, None);
}

#[tokio::test]
async fn rename_keeps_the_locale_chosen_at_creation() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new().with_builtin_tables());

    let created = service
        .create_tag(CreateTagCommand::new("Müller").with_locale("de"))
        .await
        .unwrap();
    assert_eq!(created.slug, "mueller");

    let same_name = service
        .rename_tag(RenameTagCommand {
            id: created.id,
            name: "Müller".into(),
        })
        .await
        .unwrap();
    assert_eq!(same_name.slug, "mueller");

    let new_name = service
        .rename_tag(RenameTagCommand {
            id: created.id,
            name: "Müller & Söhne".into(),
        })
        .await
        .unwrap();
    assert_eq!(new_name.slug, "mueller-soehne");
    assert_eq!(repo.stored(created.id).unwrap().slug, "mueller-soehne");
}

#[tokio::test]
async fn configured_separator_and_custom_table_reach_the_repository() {
    let path = std::env::temp_dir().join(format!(
        "tag_slug_{}_service_tables.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"es": {"ñ": "ny"}}"#).unwrap();
    let path_str = path.to_str().unwrap().to_owned();

    let config = SlugConfig::from_lookup(|key| match key {
        "SLUG_SEPARATOR" => Some(".".to_owned()),
        "SLUG_BUILTIN_TABLES" => Some("0".to_owned()),
        "SLUG_TRANSLITERATIONS_PATH" => Some(path_str.clone()),
        _ => None,
    })
    .unwrap();
    let slugifier = Slugifier::from_config(&config).unwrap();
    std::fs::remove_file(&path).ok();

    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), slugifier);

    let inputs = [
        ("  Año   Nuevo!! ", Some("es"), "anyo.nuevo"),
        ("Müller", Some("de"), "muller"),
        ("--Café..Déjà--Vu--", None, "cafe.deja.vu"),
    ];
    for (name, locale, expected) in inputs {
        let mut command = CreateTagCommand::new(name);
        if let Some(locale) = locale {
            command = command.with_locale(locale);
        }
        let dto = service.create_tag(command).await.unwrap();
        assert_eq!(dto.slug, expected);

        let stored = repo.stored(dto.id).unwrap();
        Slug::parse(stored.slug.as_str(), Separator::new('.').unwrap())
            .unwrap_or_else(|err| panic!("{name:?} -> {:?}: {err}", stored.slug));
    }
}

#[tokio::test]
async fn create_allows_empty_slug_and_duplicates() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new());

    let punct = service.create_tag(CreateTagCommand::new("!!!")).await.unwrap();
    assert_eq!(punct.slug, "");

    let first = service.create_tag(CreateTagCommand::new("Rust")).await.unwrap();
    let second = service.create_tag(CreateTagCommand::new("rust")).await.unwrap();
    assert_eq!(first.slug, second.slug);
    assert_ne!(first.id, second.id);
    assert_eq!(repo.count(), 3);
}

#[tokio::test]
async fn create_rejects_blank_name_and_bad_locale() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new());

    let blank = service.create_tag(CreateTagCommand::new("   ")).await;
    assert!(matches!(
        blank,
        Err(ApplicationError::Domain(DomainError::Validation(_)))
    ));

    let bad_locale = service
        .create_tag(CreateTagCommand::new("Rust").with_locale("en us"))
        .await;
    assert!(matches!(
        bad_locale,
        Err(ApplicationError::Domain(DomainError::Validation(_)))
    ));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn rename_rederives_slug_before_update() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new());

    let created = service
        .create_tag(CreateTagCommand::new("Old Name"))
        .await
        .unwrap();
    let renamed = service
        .rename_tag(RenameTagCommand {
            id: created.id,
            name: "  Multiple   Spaces  ".into(),
        })
        .await
        .unwrap();

    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.slug, "multiple-spaces");
    assert_eq!(repo.stored(created.id).unwrap().slug, "multiple-spaces");
}

#[tokio::test]
async fn rename_missing_tag_is_not_found() {
    let repo = Arc::new(InMemoryTagRepo::default());
    let service = service_with(Arc::clone(&repo), Slugifier::new());

    let result = service
        .rename_tag(RenameTagCommand {
            id: 42,
            name: "Anything".into(),
        })
        .await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn repository_failures_propagate() {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());
    let service = TagCommandService::new(Arc::new(FailingTagRepo), slugger);

    let result = service.create_tag(CreateTagCommand::new("Rust")).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::Persistence(_)))
    ));
}
