//! # ara-prerender
//!
//! Static HTML snapshot of the Project Ara landing page.
//!
//! The landing components are rendered with Leptos 0.8 server-side rendering
//! (`RenderHtml::to_html`) into a complete document. Effects never run here,
//! so the snapshot is the page as it looks before any scroll, pointer or
//! timer activity: first testimonial, nothing selected, empty waitlist form.
//!
//! ```rust,ignore
//! let html = ara_prerender::render_page(&LandingConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ara_landing::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use ara_landing::{App, LandingConfig};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::{debug, info};

const FONTS_HREF: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;900&display=swap";

/// Without scripts nothing ever reveals, so show every animated element in
/// its final state.
const NOSCRIPT_CSS: &str =
    ".reveal { opacity: 1 !important; transform: none !important; filter: none !important; }";

/// The complete HTML document around the landing app.
#[component]
fn PageDocument(config: LandingConfig) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{PAGE_TITLE}</title>
                <meta name="description" content=PAGE_DESCRIPTION />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link href=FONTS_HREF rel="stylesheet" />
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <App config=config />
            </body>
        </html>
    }
}

/// Render the page for `config` to a full HTML document, `<!DOCTYPE html>`
/// included.
pub fn render_page(config: &LandingConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <PageDocument config=config.clone() /> }.to_html());
    owner.cleanup();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

/// Read the config file at `path`, or the defaults when there is none.
pub fn load_config(path: Option<&Path>) -> Result<LandingConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(LandingConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    LandingConfig::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Write `html` to `out`, creating parent directories as needed.
pub fn write_page(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(out, html).with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), bytes = html.len(), "landing page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ara_landing::SECTION_ORDER;
    use ara_landing::content::TESTIMONIALS;
    use pretty_assertions::assert_eq;

    /// `data-section` values in document order.
    fn sections_in(html: &str) -> Vec<&str> {
        html.split("data-section=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page(&LandingConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Join the Modular Revolution"));
        assert!(html.contains("Get Early Access"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let html = render_page(&LandingConfig::default());
        assert_eq!(sections_in(&html), SECTION_ORDER.to_vec());
    }

    #[test]
    fn snapshot_shows_initial_state() {
        let html = render_page(&LandingConfig::default());

        // first quote only
        assert!(html.contains(TESTIMONIALS[0].author));
        assert!(!html.contains(TESTIMONIALS[1].author));
        // nothing selected yet
        assert!(!html.contains("class=\"module-info\""));
        assert!(!html.contains("Welcome to the future"));
    }

    #[test]
    fn floating_circles_follow_config() {
        let config = LandingConfig {
            floating_circles: 3,
            ..LandingConfig::default()
        };
        let html = render_page(&config);
        assert_eq!(html.matches("class=\"floating-circle\"").count(), 3);
    }

    #[test]
    fn same_config_renders_identically() {
        let config = LandingConfig::default();
        assert_eq!(render_page(&config), render_page(&config));

        let reseeded = LandingConfig {
            jitter_seed: 7,
            ..LandingConfig::default()
        };
        assert_ne!(render_page(&config), render_page(&reseeded));
    }

    #[test]
    fn missing_config_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), LandingConfig::default());
    }

    #[test]
    fn config_file_is_parsed_and_validated() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        fs::write(&good, r#"{ "floating_circles": 2 }"#).unwrap();
        assert_eq!(load_config(Some(&good)).unwrap().floating_circles, 2);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{ "rotation_interval_ms": 0 }"#).unwrap();
        let err = load_config(Some(&bad)).unwrap_err();
        assert!(format!("{err:#}").contains("rotation_interval_ms"));

        let missing = dir.path().join("missing.json");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn write_page_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist/nested/index.html");

        write_page(&out, "<!DOCTYPE html>").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "<!DOCTYPE html>");
    }
}
