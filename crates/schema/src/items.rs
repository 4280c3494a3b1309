//! Record types, one per built-in section.
//!
//! Every record carries an `id` and a `visible` flag; the remaining fields
//! default to empty so partially filled records still deserialize.

use crate::basics::Url;
use crate::default_true;
use crate::section::SectionItem;
use serde::{Deserialize, Serialize};

macro_rules! define_item {
    (
        $(#[$attr:meta])*
        $name:ident { $($field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            pub id: String,
            #[serde(default = "default_true")]
            pub visible: bool,
            $(pub $field: $ty,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    id: String::new(),
                    visible: true,
                    $($field: Default::default(),)*
                }
            }
        }

        impl SectionItem for $name {
            fn id(&self) -> &str {
                &self.id
            }

            fn visible(&self) -> bool {
                self.visible
            }
        }
    };
}

define_item!(
    /// A social or professional network account.
    Profile { network: String, username: String, icon: String, url: Url }
);

define_item!(Experience {
    company: String,
    position: String,
    location: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(Education {
    institution: String,
    study_type: String,
    area: String,
    score: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(Award {
    title: String,
    awarder: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(Certification {
    name: String,
    issuer: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(
    /// `level` is nominally 0-5; values outside that range are kept as-is.
    Skill { name: String, description: String, level: i32, keywords: Vec<String> }
);

define_item!(Interest {
    name: String,
    keywords: Vec<String>,
});

define_item!(Publication {
    name: String,
    publisher: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(Volunteer {
    organization: String,
    position: String,
    location: String,
    date: String,
    summary: String,
    url: Url,
});

define_item!(Language {
    name: String,
    description: String,
    level: i32,
});

define_item!(
    /// `url2` is an optional secondary link, typically to the source code.
    Project {
        name: String,
        description: String,
        date: String,
        summary: String,
        keywords: Vec<String>,
        url: Url,
        url2: Option<Url>,
    }
);

define_item!(Reference {
    name: String,
    description: String,
    summary: String,
    url: Url,
});

define_item!(
    /// A record of a user-defined section.
    CustomItem {
        name: String,
        description: String,
        date: String,
        location: String,
        level: i32,
        summary: String,
        keywords: Vec<String>,
        url: Url,
    }
);
