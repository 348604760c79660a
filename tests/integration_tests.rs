use pagesmith::models::{ComponentDraft, PageDraft, Theme, VisibilityFlag};
use pagesmith::services::payload::{build_create_page_request, PayloadOptions};
use pagesmith::services::{slug, validation, visibility};
use pagesmith::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

// A page as the backend returns it from GET /api/Pages/{id}
const BACKEND_PAGE: &str = r#"{
    "id": 18,
    "name": "Payroll Services",
    "categoryId": 4,
    "slug": "payroll-services",
    "metaTitle": "Payroll",
    "metaDescription": null,
    "isHomepage": false,
    "isPublished": true,
    "components": [
        {
            "id": 101,
            "pageId": 18,
            "componentType": "PayrollHeroSection",
            "componentName": "Payroll Hero",
            "orderIndex": 0,
            "contentJson": "{\"title\":\"Payroll Management Solutions\"}",
            "isVisible": 1,
            "theme": 1
        },
        {
            "id": 102,
            "pageId": 18,
            "componentType": "PayrollFAQ",
            "componentName": "FAQ",
            "orderIndex": 1,
            "contentJson": "{\"faqs\":[]}",
            "isVisible": false,
            "theme": 2
        }
    ]
}"#;

mod page_workflow_tests {
    use super::*;

    #[test]
    fn test_backend_page_round_trips_flags() {
        let page: PageDraft = serde_json::from_str(BACKEND_PAGE).unwrap();
        assert_eq!(page.components[0].is_visible, VisibilityFlag::Int(1));
        assert_eq!(page.components[1].theme, Theme::Dark);

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["components"][0]["isVisible"], 1);
        assert_eq!(value["components"][1]["isVisible"], false);
        assert_eq!(value["components"][1]["theme"], 2);
    }

    #[test]
    fn test_backend_page_is_valid() {
        let page: PageDraft = serde_json::from_str(BACKEND_PAGE).unwrap();
        assert!(validation::validate_page_data(&page).is_empty());
        assert!(validation::validate_components(&page.components).is_empty());
    }

    #[test]
    fn test_public_view_hides_flagged_components() {
        let page: PageDraft = serde_json::from_str(BACKEND_PAGE).unwrap();
        let shown = visibility::get_visible_components(&page.components, false);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].component_type, "PayrollHeroSection");
        assert_eq!(
            visibility::get_visible_components(&page.components, true).len(),
            2
        );
    }

    #[test]
    fn test_new_page_from_editor() {
        let name = "HR & Admin";
        let mut page = PageDraft::new(name, Some(1)).with_slug(&slug::generate_slug(name));
        page.components.push(
            ComponentDraft::new("HeroSection", "Hero", 0)
                .with_content(&serde_json::json!({ "title": "People first" })),
        );

        assert!(validation::validate_page_data(&page).is_empty());
        assert!(slug::validate_slug("hr-admin"));

        let request = build_create_page_request(&page, &PayloadOptions::default()).unwrap();
        assert_eq!(request.path, "/api/Pages/with-components");
        assert_eq!(request.body["slug"], "hr-admin");
        assert_eq!(request.body["components"][0]["orderIndex"], 1);
        assert_eq!(
            request.body["components"][0]["contentJson"],
            r#"{"title":"People first"}"#
        );
    }
}

mod config_integration_tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let file = write_temp(
            r#"
[api]
base_path = "/backend/api"

[validation]
slug_max = 80

[builder]
order_index_base = 0
"#,
            ".toml",
        );

        let config = Config::load(file.path()).expect("Failed to load config");
        assert_eq!(config.api.base_path, "/backend/api");
        assert_eq!(config.validation.slug_max, 80);
        assert_eq!(config.validation.name_max, 100);
        assert_eq!(config.builder.order_index_base, 0);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let file = write_temp("[validation]\nslug_max = 0\n", ".toml");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagesmith.toml");

        assert!(Config::load(&path).is_err());
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.api.base_path, "/api");
    }
}

mod cli_integration_tests {
    use super::*;

    #[test]
    fn test_validate_reports_page_and_component_errors() {
        let file = write_temp(
            r#"{
                "name": "H",
                "categoryId": null,
                "components": [
                    { "componentType": "CTASection", "orderIndex": 0, "contentJson": "{}" },
                    { "componentType": "CTASection", "orderIndex": 0, "contentJson": "{}" }
                ]
            }"#,
            ".json",
        );

        let errors = pagesmith::cli::validate::check(&Config::default(), file.path()).unwrap();
        assert_eq!(
            errors,
            vec![
                "Page name must be at least 2 characters long",
                "Category ID is required",
                "Duplicate orderIndex 0",
            ]
        );
    }

    #[test]
    fn test_validate_accepts_backend_page() {
        let file = write_temp(BACKEND_PAGE, ".json");
        let errors = pagesmith::cli::validate::check(&Config::default(), file.path()).unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_fails_on_malformed_json() {
        let file = write_temp("{ not json", ".json");
        assert!(pagesmith::cli::validate::check(&Config::default(), file.path()).is_err());
    }

    #[test]
    fn test_payload_uses_config() {
        let file = write_temp(BACKEND_PAGE, ".json");
        let config: Config = toml::from_str("[api]\nbase_path = \"/v2\"\n").unwrap();

        let create = pagesmith::cli::payload::build(&config, file.path(), None).unwrap();
        assert_eq!(create.path, "/v2/Pages/with-components");
        assert!(create.body.get("id").is_none());

        let update = pagesmith::cli::payload::build(&config, file.path(), Some(18)).unwrap();
        assert_eq!(update.path, "/v2/Pages");
        assert_eq!(update.body["id"], 18);
        assert_eq!(update.body["categoryId"], 4);
    }
}
