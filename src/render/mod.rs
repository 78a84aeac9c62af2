// src/render/mod.rs
use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::{fs, path::Path};
use tracing::debug;

use crate::classify::{Bucket, Classification};

pub mod card;

pub use card::render_card;

pub const ERROR_MESSAGE: &str =
    "Error al cargar los eventos. Por favor, inténtalo de nuevo más tarde.";
const NO_TODAY_MESSAGE: &str = "No hay eventos programados para hoy.";

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; color: #222; }
main { max-width: 960px; margin: 0 auto; padding: 1rem; }
section { margin-bottom: 2rem; }
.event-card { background: #fff; border-radius: 8px; padding: 1rem; margin: .75rem 0; box-shadow: 0 1px 3px rgba(0,0,0,.12); }
.event-date { font-size: .9rem; color: #555; }
.event-title { margin: .4rem 0; }
.event-meta { font-size: .85rem; color: #666; }
.load-error { text-align: center; color: red; }
"#;

/// Card fragments per section, in section order, plus the "nothing today" toggle.
#[derive(Debug)]
pub struct Regions {
    pub sections: Vec<(Bucket, Vec<Markup>)>,
    pub has_today: bool,
}

impl Regions {
    pub fn cards(&self, bucket: Bucket) -> &[Markup] {
        self.sections
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, cards)| cards.as_slice())
            .unwrap_or(&[])
    }
}

pub fn render_regions(classification: &Classification) -> Regions {
    let sections = Bucket::ALL
        .iter()
        .map(|&bucket| {
            let cards = classification
                .bucket(bucket)
                .iter()
                .map(render_card)
                .collect::<Vec<_>>();
            debug!(region = bucket.region_id(), cards = cards.len(), "rendered region");
            (bucket, cards)
        })
        .collect();

    Regions {
        sections,
        has_today: classification.has_today,
    }
}

fn shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                header { h1 { (title) } }
                (content)
            }
        }
    }
}

/// Full board: one section per bucket, container ids `<region>-events`.
pub fn render_page(regions: &Regions, title: &str) -> Markup {
    let no_today_style = if regions.has_today {
        "display: none"
    } else {
        "display: block"
    };

    shell(
        title,
        html! {
            main {
                @for (bucket, cards) in &regions.sections {
                    section id=(bucket.region_id()) {
                        h2 { (bucket.title()) }
                        @if *bucket == Bucket::Today {
                            p #"no-today" style=(no_today_style) { (NO_TODAY_MESSAGE) }
                        }
                        div.events id={ (bucket.region_id()) "-events" } {
                            @for card in cards {
                                (card)
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Board replaced wholesale by the load error message.
pub fn render_error_page(title: &str) -> Markup {
    shell(
        title,
        html! {
            main {
                p.load-error { (ERROR_MESSAGE) }
            }
        },
    )
}

/// Write a rendered page to `path` in one go.
pub fn write_page(path: &Path, page: &Markup) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, &page.0).with_context(|| format!("writing {}", path.display()))
}
