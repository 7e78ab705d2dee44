//! Endpoint catalogue.
//!
//! One submodule per product, one module per resource. Each resource module
//! holds the resource type, its [`Route`](crate::Route), and one options
//! struct per supported operation.

/// Defines a string-valued enum as it travels on the wire.
///
/// Values the crate does not know deserialize to `Unknown` instead of
/// failing the whole resource. `Unknown` is never sent: a request carrying it
/// fails to build.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value not known to this version of the crate.
            #[serde(other)]
            Unknown,
        }

        impl $name {
            /// The wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::ParamValue for $name {
            fn to_param(&self) -> String {
                self.as_str().to_string()
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }
    };
}

/// Adds the `page_size`/`limit` setters and the [`ReadOptions`](crate::ReadOptions)
/// impl to a read options struct with `page_size` and `limit` fields.
macro_rules! read_paging {
    ($name:ident) => {
        impl $name {
            /// Sets how many records each page request asks for.
            pub fn page_size(mut self, page_size: u32) -> Self {
                self.page_size = Some(page_size);
                self
            }

            /// Caps the total number of records yielded.
            pub fn limit(mut self, limit: u64) -> Self {
                self.limit = Some(limit);
                self
            }
        }

        impl $crate::ReadOptions for $name {
            fn page_size(&self) -> Option<u32> {
                self.page_size
            }

            fn limit(&self) -> Option<u64> {
                self.limit
            }
        }
    };
}

pub(crate) use read_paging;
pub(crate) use wire_enum;

pub mod api;
pub mod chat;
pub mod notify;
pub mod sync;
pub mod taskrouter;
pub mod trunking;
