//! Portfolio content rendered by the page.
//!
//! The markup can embed its own content as JSON in `#portfolio-data`; without
//! it the built-in portfolio below is shown.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

pub const CONTENT_ELEMENT_ID: &str = "portfolio-data";
/// The section that plays the one-time reveal.
pub const ABOUT_ID: &str = "about";
/// Element id and list key of the shared project drawer; no project may take it.
pub const DRAWER_ID: &str = "project-drawer";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub year: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: About,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in document order; the scrollspy relies on this order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "contact", label: "Contact" },
];

pub fn section_ids() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|n| n.id).collect()
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut p: Portfolio =
            serde_json::from_str(raw).map_err(|source| PageError::InvalidJson {
                source_id: CONTENT_ELEMENT_ID,
                source,
            })?;
        p.dedupe_project_ids();
        Ok(p)
    }

    /// Card ids double as DOM hooks and list keys; repeated ids (and the
    /// drawer's id) get a numeric suffix.
    fn dedupe_project_ids(&mut self) {
        let mut seen = std::collections::HashSet::new();
        seen.insert(DRAWER_ID.to_string());
        for (i, project) in self.projects.iter_mut().enumerate() {
            if project.id.trim().is_empty() {
                project.id = format!("project-{}", i + 1);
            }
            if !seen.insert(project.id.clone()) {
                let mut n = 2;
                while seen.contains(&format!("{}-{}", project.id, n)) {
                    n += 1;
                }
                project.id = format!("{}-{}", project.id, n);
                seen.insert(project.id.clone());
            }
        }
    }

    pub fn load() -> Self {
        match crate::dom::json_block(CONTENT_ELEMENT_ID) {
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(p) => {
                    crate::util::clog("content: loaded #portfolio-data");
                    p
                }
                Err(e) => {
                    crate::util::cwarn(&format!("{e}; using built-in content"));
                    Self::default()
                }
            },
            Ok(None) => {
                crate::util::clog("content: built-in");
                Self::default()
            }
            Err(e) => {
                crate::util::cwarn(&e.to_string());
                Self::default()
            }
        }
    }
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            owner: Owner {
                name: "Alex Morgan".to_string(),
                tagline: "Software engineer building fast, reliable tools for the web.".to_string(),
            },
            about: About {
                heading: "About me".to_string(),
                paragraphs: strings(&[
                    "I design and build software end to end, from data models and services to the interfaces people touch every day.",
                    "Most of my recent work sits where performance meets usability: rendering pipelines, developer tooling and small, sharp web apps.",
                ]),
                highlights: strings(&["Rust & WebAssembly", "TypeScript", "Distributed systems", "Accessibility"]),
            },
            projects: vec![
                Project {
                    id: "trailmap".to_string(),
                    title: "Trailmap".to_string(),
                    summary: "Offline-first hiking map with vector tiles.".to_string(),
                    details: strings(&[
                        "Tiles are cached in the browser and rendered on a canvas, so the map keeps working without signal.",
                        "Route elevation profiles are computed on the client from the tile data.",
                    ]),
                    tags: strings(&["Rust", "WebAssembly", "Canvas"]),
                    links: vec![link("Source", "https://example.com/trailmap")],
                    year: Some(2025),
                },
                Project {
                    id: "ledger".to_string(),
                    title: "Ledger".to_string(),
                    summary: "Household budgeting with shared categories.".to_string(),
                    details: strings(&[
                        "Imports bank statements, deduplicates transactions and suggests categories from history.",
                    ]),
                    tags: strings(&["TypeScript", "PostgreSQL"]),
                    links: vec![link("Live demo", "https://example.com/ledger")],
                    year: Some(2024),
                },
                Project {
                    id: "patchbay".to_string(),
                    title: "Patchbay".to_string(),
                    summary: "Browser synthesizer with a modular patch editor.".to_string(),
                    details: strings(&[
                        "Audio graph runs in an AudioWorklet; patches are shareable as URLs.",
                        "Keyboard-first editing with full screen-reader labels.",
                    ]),
                    tags: strings(&["Web Audio", "Rust"]),
                    links: vec![
                        link("Source", "https://example.com/patchbay"),
                        link("Write-up", "https://example.com/patchbay-notes"),
                    ],
                    year: Some(2024),
                },
                Project {
                    id: "quarry".to_string(),
                    title: "Quarry".to_string(),
                    summary: "Log search CLI that streams gigabytes per second.".to_string(),
                    details: strings(&[
                        "Memory-mapped input with SIMD line splitting and a small query language.",
                    ]),
                    tags: strings(&["Rust", "CLI"]),
                    links: vec![link("Source", "https://example.com/quarry")],
                    year: Some(2023),
                },
                Project {
                    id: "studio-site".to_string(),
                    title: "Studio site".to_string(),
                    summary: "Portfolio and booking site for a photography studio.".to_string(),
                    details: strings(&[
                        "Responsive image sets, lazy loading and a booking form with calendar sync.",
                    ]),
                    tags: strings(&["HTML", "CSS"]),
                    links: vec![],
                    year: Some(2022),
                },
            ],
            contact: Contact {
                email: "hello@example.com".to_string(),
                blurb: "Open to freelance work and interesting full-time roles.".to_string(),
                links: vec![
                    link("GitHub", "https://github.com/example"),
                    link("LinkedIn", "https://www.linkedin.com/in/example"),
                ],
            },
        }
    }
}
