// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Page builders
//!
//! Pure functions from a lookup result to the list of nodes the front end
//! renders. There are exactly two pages: the Pokémon card and the error page.

use shared_types::{NotFound, Pokemon};

use crate::components::Component;

/// Brand shown in the navigation bar and the HTML shell
pub const APP_TITLE: &str = "Pokémon Finder";

/// Edge length of the sprite image in pixels
pub const SPRITE_SIZE: u32 = 200;

const CONTAINER_CLASS: &str = "container mx-auto p-4";
const ERROR_CONTAINER_CLASS: &str = "container mx-auto p-4 text-red-500";
const BADGE_ROW_CLASS: &str = "my-2";
const BADGE_CLASS: &str = "badge bg-blue-500 text-white mx-1";

/// Render whichever page matches the lookup outcome
pub fn render(lookup: Result<&Pokemon, &NotFound>) -> Vec<Component> {
    match lookup {
        Ok(pokemon) => render_pokemon(pokemon),
        Err(not_found) => render_not_found(not_found),
    }
}

/// Pokémon card: title, navbar, heading, sprite and one badge per type
pub fn render_pokemon(pokemon: &Pokemon) -> Vec<Component> {
    let display_name = pokemon.display_name();

    let badges = pokemon
        .types
        .iter()
        .map(|type_name| Component::span(type_name.as_str(), BADGE_CLASS))
        .collect();

    vec![
        Component::page_title(format!("{display_name} — Pokémon")),
        Component::navbar(APP_TITLE, Some("/")),
        Component::div(
            vec![
                Component::heading(display_name, 2),
                Component::image(
                    pokemon.sprite.as_str(),
                    pokemon.name.as_str(),
                    SPRITE_SIZE,
                    SPRITE_SIZE,
                ),
                Component::div(badges, BADGE_ROW_CLASS),
            ],
            CONTAINER_CLASS,
        ),
    ]
}

/// Error page carrying the failure detail
pub fn render_not_found(not_found: &NotFound) -> Vec<Component> {
    vec![
        Component::page_title(format!("Error — {APP_TITLE}")),
        Component::navbar(APP_TITLE, None),
        Component::div(
            vec![
                Component::heading("Error", 2),
                Component::paragraph(not_found.detail.as_str()),
            ],
            ERROR_CONTAINER_CLASS,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared_types::NOT_FOUND_MESSAGE;

    use super::*;
    use crate::components::{Div, Heading, Image, PageTitle, Span};

    fn ditto() -> Pokemon {
        Pokemon {
            name: "ditto".to_string(),
            sprite: "https://img.example/132.png".to_string(),
            types: vec!["normal".to_string()],
        }
    }

    fn container(page: &[Component]) -> &Div {
        match &page[2] {
            Component::Div(div) => div,
            other => panic!("expected container div, got {other:?}"),
        }
    }

    #[test]
    fn pokemon_page_title_and_heading() {
        let page = render_pokemon(&ditto());

        assert_eq!(
            page[0],
            Component::PageTitle(PageTitle {
                text: "Ditto — Pokémon".to_string()
            })
        );
        assert_eq!(
            container(&page).components[0],
            Component::Heading(Heading {
                text: "Ditto".to_string(),
                level: 2
            })
        );
    }

    #[test]
    fn pokemon_page_image() {
        let page = render_pokemon(&ditto());

        assert_eq!(
            container(&page).components[1],
            Component::Image(Image {
                src: "https://img.example/132.png".to_string(),
                alt: "ditto".to_string(),
                width: 200,
                height: 200,
            })
        );
    }

    #[test]
    fn one_badge_per_type_in_order() {
        let pokemon = Pokemon {
            types: vec!["grass".to_string(), "poison".to_string()],
            ..ditto()
        };
        let page = render_pokemon(&pokemon);

        let Component::Div(badges) = &container(&page).components[2] else {
            panic!("expected badge row");
        };
        let texts: Vec<_> = badges
            .components
            .iter()
            .map(|badge| match badge {
                Component::Span(Span { text, class_name }) => {
                    assert_eq!(class_name.as_deref(), Some(BADGE_CLASS));
                    text.as_str()
                }
                other => panic!("expected badge, got {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["grass", "poison"]);
    }

    #[test]
    fn no_types_renders_empty_badge_row() {
        let pokemon = Pokemon {
            types: Vec::new(),
            ..ditto()
        };
        let page = render_pokemon(&pokemon);
        let Component::Div(badges) = &container(&page).components[2] else {
            panic!("expected badge row");
        };
        assert!(badges.components.is_empty());
    }

    #[test]
    fn not_found_page_json() {
        let page = render_not_found(&NotFound::default());
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value,
            json!([
                { "type": "PageTitle", "text": "Error — Pokémon Finder" },
                { "type": "Navbar", "title": "Pokémon Finder", "startLinks": [], "endLinks": [] },
                {
                    "type": "Div",
                    "className": "container mx-auto p-4 text-red-500",
                    "components": [
                        { "type": "Heading", "text": "Error", "level": 2 },
                        { "type": "Paragraph", "text": NOT_FOUND_MESSAGE }
                    ]
                }
            ])
        );
    }

    #[test]
    fn render_dispatches_on_outcome() {
        let pokemon = ditto();
        let not_found = NotFound::default();

        assert_eq!(render(Ok(&pokemon)), render_pokemon(&pokemon));
        assert_eq!(render(Err(&not_found)), render_not_found(&not_found));
    }
}
