use crate::permissions::{ADMIN, STAFF};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml_edit::{value, Array, DocumentMut, Item, Table};
use tracing::info;

trait ConfigSerializeDefault {
    fn fix_config(self, name: &str, doc: &mut DocumentMut);
}

macro_rules! impl_simple_default {
    ( $( $type:ty ),* ) => {
        $(
            impl ConfigSerializeDefault for $type {
                fn fix_config(self, name: &str, doc: &mut DocumentMut) {
                    doc.entry(name).or_insert_with(|| value(self));
                }
            }
        )*
    }
}

impl_simple_default!(String, bool);

impl ConfigSerializeDefault for IndexMap<String, Vec<String>> {
    fn fix_config(self, name: &str, doc: &mut DocumentMut) {
        doc.entry(name).or_insert_with(|| {
            let mut table = Table::new();
            for (key, entries) in self {
                table.insert(&key, value(Array::from_iter(entries)));
            }
            Item::Table(table)
        });
    }
}

macro_rules! gen_config {
    (
        $( $(#[$doc:meta])* $name:ident: $type:ty = $default:expr ),*
    ) => {
        #[derive(Serialize, Deserialize, Debug, Clone)]
        pub struct WorkshopConfig {
            $(
                $(#[$doc])*
                pub $name: $type,
            )*
        }

        impl WorkshopConfig {
            /// Reads `config_file`, writing back any keys it was missing.
            pub fn load(config_file: impl AsRef<Path>) -> Result<WorkshopConfig> {
                let path = config_file.as_ref();
                let str = match fs::read_to_string(path) {
                    Ok(str) => str,
                    Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
                    Err(err) => {
                        return Err(err).with_context(|| {
                            format!("error reading config file at {}", path.display())
                        })
                    }
                };
                let mut doc = str
                    .parse::<DocumentMut>()
                    .with_context(|| format!("error parsing config file at {}", path.display()))?;

                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*

                let patched = doc.to_string();
                if str != patched {
                    fs::write(path, &patched)
                        .with_context(|| format!("error writing config file at {}", path.display()))?;
                    info!("Added default settings to {}", path.display());
                }

                toml::from_str(&patched)
                    .with_context(|| format!("invalid settings in {}", path.display()))
            }

            pub fn defaults() -> WorkshopConfig {
                WorkshopConfig {
                    $( $name: $default, )*
                }
            }
        }
    };
}

gen_config! {
    /// Whether `/workshop banitem` is available.
    enable_banitem: bool = true,
    /// Whether `/workshop nick` is available.
    enable_nickname: bool = true,
    /// Group name to the permission patterns it grants.
    permission_groups: IndexMap<String, Vec<String>> = default_groups(),
    /// Sender name to the groups it belongs to.
    sender_groups: IndexMap<String, Vec<String>> = IndexMap::new()
}

fn default_groups() -> IndexMap<String, Vec<String>> {
    let mut groups = IndexMap::new();
    groups.insert("staff".to_string(), vec![STAFF.to_string()]);
    groups.insert("admin".to_string(), vec![STAFF.to_string(), ADMIN.to_string()]);
    groups
}
