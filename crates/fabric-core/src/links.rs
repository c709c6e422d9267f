// ── Hypermedia link construction ──
//
// Factories are plain values built from a `LinkConfig` and handed to the
// projections that need them. Nothing here is global.

use std::borrow::Cow;

use fabric_api::{Link, Links};
use strum::{AsRefStr, Display, IntoStaticStr};

use crate::config::LinkConfig;
use crate::model::Router;

/// Relation name of the canonical link to an entity itself.
pub const SELF_LINK: &str = "self";

/// Collection names used in link paths and as relation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EntityName {
    Routers,
    Terminators,
}

/// Anything a link can point at.
pub trait LinkEntity {
    fn id(&self) -> &str;
}

impl LinkEntity for Router {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Builds the relation map advertised on an entity.
pub trait LinkFactory: Send + Sync {
    fn self_link(&self, entity: &dyn LinkEntity) -> Link;

    fn links(&self, entity: &dyn LinkEntity) -> Links;
}

// ── Basic factory ──────────────────────────────────────────────────

/// Supplies the `self` link for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLinkFactory {
    entity_name: EntityName,
    config: LinkConfig,
}

impl BasicLinkFactory {
    pub fn new(entity_name: EntityName, config: LinkConfig) -> Self {
        Self {
            entity_name,
            config,
        }
    }

    /// Link to the `nested` collection scoped under `entity`.
    pub fn nested_link(&self, entity: &dyn LinkEntity, nested: EntityName) -> Link {
        let id = id_segment(entity.id());
        Link::new(self.href(&[self.entity_name.as_ref(), id.as_ref(), nested.as_ref()]))
    }

    // An empty id yields a degenerate `routers/` path rather than an error;
    // stored entities always carry one.
    fn href(&self, segments: &[&str]) -> String {
        let path = segments.join("/");
        match self.config.base_url() {
            Some(base) => format!("{base}{path}"),
            None => format!("./{path}"),
        }
    }
}

/// Encode an entity id as exactly one path segment.
fn id_segment(id: &str) -> Cow<'_, str> {
    match id {
        // Left bare, dot segments would be resolved away by the client.
        "." => Cow::Borrowed("%2E"),
        ".." => Cow::Borrowed("%2E%2E"),
        _ => urlencoding::encode(id),
    }
}

impl LinkFactory for BasicLinkFactory {
    fn self_link(&self, entity: &dyn LinkEntity) -> Link {
        let id = id_segment(entity.id());
        Link::new(self.href(&[self.entity_name.as_ref(), id.as_ref()]))
    }

    fn links(&self, entity: &dyn LinkEntity) -> Links {
        let mut links = Links::new();
        links.insert(SELF_LINK.to_owned(), self.self_link(entity));
        links
    }
}

// ── Router factory ─────────────────────────────────────────────────

/// Router links: `self` plus the nested `terminators` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLinkFactory {
    basic: BasicLinkFactory,
}

impl RouterLinkFactory {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            basic: BasicLinkFactory::new(EntityName::Routers, config),
        }
    }
}

impl Default for RouterLinkFactory {
    fn default() -> Self {
        Self::new(LinkConfig::relative())
    }
}

impl LinkFactory for RouterLinkFactory {
    fn self_link(&self, entity: &dyn LinkEntity) -> Link {
        self.basic.self_link(entity)
    }

    fn links(&self, entity: &dyn LinkEntity) -> Links {
        let mut links = self.basic.links(entity);
        links.insert(
            EntityName::Terminators.to_string(),
            self.basic.nested_link(entity, EntityName::Terminators),
        );
        links
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Named(&'static str);

    impl LinkEntity for Named {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn basic_factory_only_has_self() {
        let factory = BasicLinkFactory::new(EntityName::Terminators, LinkConfig::relative());
        let links = factory.links(&Named("t-9"));

        assert_eq!(links.len(), 1);
        assert_eq!(links[SELF_LINK].href, "./terminators/t-9");
    }

    #[test]
    fn router_links_add_terminators() {
        let links = RouterLinkFactory::default().links(&Named("r-1"));

        assert_eq!(
            links.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["self", "terminators"]
        );
        assert_eq!(links["self"].href, "./routers/r-1");
        assert_eq!(links["terminators"].href, "./routers/r-1/terminators");
    }

    #[test]
    fn empty_id_gives_degenerate_links() {
        let links = RouterLinkFactory::default().links(&Named(""));
        assert_eq!(links["self"].href, "./routers/");
        assert_eq!(links["terminators"].href, "./routers//terminators");
    }

    #[test]
    fn absolute_links_append_to_base() {
        let config = LinkConfig::from_base_url("https://ctrl.example:1280/edge/management/v1").unwrap();
        let links = RouterLinkFactory::new(config).links(&Named("r-1"));

        assert_eq!(
            links["self"].href,
            "https://ctrl.example:1280/edge/management/v1/routers/r-1"
        );
        assert_eq!(
            links["terminators"].href,
            "https://ctrl.example:1280/edge/management/v1/routers/r-1/terminators"
        );
    }

    #[test]
    fn dot_ids_stay_one_segment() {
        let config = LinkConfig::from_base_url("https://c.example/edge/v1").unwrap();
        let factory = RouterLinkFactory::new(config);

        let links = factory.links(&Named(".."));
        assert_eq!(links["self"].href, "https://c.example/edge/v1/routers/%2E%2E");
        assert_eq!(
            links["terminators"].href,
            "https://c.example/edge/v1/routers/%2E%2E/terminators"
        );

        let links = RouterLinkFactory::default().links(&Named("."));
        assert_eq!(links["self"].href, "./routers/%2E");
    }

    #[test]
    fn reserved_characters_in_ids_are_encoded() {
        let config = LinkConfig::from_base_url("https://c.example/edge/v1").unwrap();
        let links = RouterLinkFactory::new(config).links(&Named("a#b"));
        assert_eq!(links["self"].href, "https://c.example/edge/v1/routers/a%23b");
        assert_eq!(
            links["terminators"].href,
            "https://c.example/edge/v1/routers/a%23b/terminators"
        );

        let links = RouterLinkFactory::default().links(&Named("a/b?c"));
        assert_eq!(links["terminators"].href, "./routers/a%2Fb%3Fc/terminators");
    }

    #[test]
    fn relative_and_absolute_encode_alike() {
        let config = LinkConfig::from_base_url("https://c.example/").unwrap();
        let absolute = RouterLinkFactory::new(config).links(&Named("a b"));
        let relative = RouterLinkFactory::default().links(&Named("a b"));

        assert_eq!(absolute["self"].href, "https://c.example/routers/a%20b");
        assert_eq!(relative["self"].href, "./routers/a%20b");
    }

    #[test]
    fn entity_names_are_lowercase() {
        assert_eq!(EntityName::Routers.as_ref(), "routers");
        let name: &'static str = EntityName::Terminators.into();
        assert_eq!(name, "terminators");
    }
}
