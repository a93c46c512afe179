//! Markdown rendering of the asset catalog and display-name normalization.
//!
//! [`normalize`] turns raw metadata names into display names; [`render_catalog`]
//! turns an assembled [`Catalog`] into the generated README listing.

mod titlecase;

use tracing::{debug, instrument};

use katalog_shared::{Catalog, RenderOptions};

pub use titlecase::{normalize, title_case};

/// Heading that introduces the per-category sections.
const LIST_HEADING: &str = "# List of Default Catalog Assets";

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render the catalog as a Markdown document.
///
/// Layout:
/// ```text
/// <!-- Do not edit. ... -->
///
/// # <title>
///
/// <intro>
///
/// # List of Default Catalog Assets
///
///
/// ## Pipelines
/// * [Name](./pipeline-samples/...)
///
///
/// ## Pipeline Components
/// ...
/// ```
///
/// Every section is rendered, including empty ones. Entries keep the order of
/// the section map.
#[instrument(skip_all, fields(sections = catalog.sections.len()))]
pub fn render_catalog(catalog: &Catalog, opts: &RenderOptions) -> String {
    let mut md: Vec<String> = vec![render_preamble(opts)];

    for section in &catalog.sections {
        md.push(format!("## {}", section.category.heading()));

        for (name, url) in &section.entries {
            md.push(format!("* [{name}]({url})"));
        }

        md.push("\n".to_string());
    }

    let document = md.join("\n");
    debug!(len = document.len(), "catalog rendered");
    document
}

/// The fixed block above the listing: generator notice, title, intro.
fn render_preamble(opts: &RenderOptions) -> String {
    format!(
        "<!-- Do not edit. This file was generated by {generator} -->\n\
         \n\
         # {title}\n\
         \n\
         {intro}\n\
         \n\
         {LIST_HEADING}\n\
         \n",
        generator = opts.generator,
        title = opts.title,
        intro = opts.intro,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use katalog_shared::{AssetCategory, AssetRecord, CatalogSection};

    fn section(category: AssetCategory, entries: &[(&str, &str)]) -> CatalogSection {
        let mut section = CatalogSection::new(category);
        for (name, url) in entries {
            section.insert(AssetRecord {
                name: (*name).into(),
                url: (*url).into(),
            });
        }
        section
    }

    #[test]
    fn preamble_uses_options() {
        let opts = RenderOptions {
            generator: "katalog".into(),
            title: "Demo".into(),
            intro: "Hello.".into(),
        };
        assert_eq!(
            render_preamble(&opts),
            "<!-- Do not edit. This file was generated by katalog -->\n\n\
             # Demo\n\nHello.\n\n# List of Default Catalog Assets\n\n"
        );
    }

    #[test]
    fn renders_sections_in_order_with_separators() {
        let catalog = Catalog {
            sections: vec![
                section(
                    AssetCategory::Pipeline,
                    &[("Flip Coin", "./pipeline-samples/flip-coin.yaml")],
                ),
                section(AssetCategory::Component, &[]),
            ],
        };

        let opts = RenderOptions::default();
        let doc = render_catalog(&catalog, &opts);
        let body = doc
            .strip_prefix(&render_preamble(&opts))
            .expect("document starts with preamble");

        assert_eq!(
            body,
            "\n## Pipelines\n\
             * [Flip Coin](./pipeline-samples/flip-coin.yaml)\n\n\n\
             ## Pipeline Components\n\n"
        );
    }

    #[test]
    fn default_preamble_matches_published_readme() {
        let doc = render_catalog(&Catalog::default(), &RenderOptions::default());
        assert!(doc.starts_with("<!-- Do not edit."));
        assert!(doc.contains("\n# MLX Katalog\n"));
        assert!(doc.contains(
            "The MLX _Katalog_ project hosts the default assets to bootstrap the \
             _Machine Learning Exchange_."
        ));
        assert!(doc.ends_with("# List of Default Catalog Assets\n\n"));
    }

    #[test]
    fn entries_render_as_links() {
        let catalog = Catalog {
            sections: vec![section(
                AssetCategory::Dataset,
                &[
                    ("NOAA Weather Data", "./dataset-samples/noaa/weather.yaml"),
                    ("PubLayNet", "./dataset-samples/publaynet/publaynet.yaml"),
                ],
            )],
        };

        let doc = render_catalog(&catalog, &RenderOptions::default());
        assert!(doc.contains(
            "## Datasets\n\
             * [NOAA Weather Data](./dataset-samples/noaa/weather.yaml)\n\
             * [PubLayNet](./dataset-samples/publaynet/publaynet.yaml)\n"
        ));
    }
}
