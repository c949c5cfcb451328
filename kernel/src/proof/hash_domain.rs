//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. The enum,
//! `as_bytes()`, `ALL`, and `Display` are generated from one macro list.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // Models

    /// Graph model snapshot (vertices + adjacency in insertion order).
    GraphModel => b"COSTWISE::GRAPH_MODEL::V1\0",

    /// Config space snapshot (categories, weights, items).
    ConfigSpace => b"COSTWISE::CONFIG_SPACE::V1\0",

    // Search results

    /// Route result from graph uniform-cost search.
    RouteResult => b"COSTWISE::ROUTE_RESULT::V1\0",

    /// Best-configuration result from config-space search.
    ConfigResult => b"COSTWISE::CONFIG_RESULT::V1\0",

    // Harness

    /// Effective search policy of a run.
    RunPolicy => b"COSTWISE::RUN_POLICY::V1\0",

    /// Run report (world id + policy digest + result digest).
    RunReport => b"COSTWISE::RUN_REPORT::V1\0",
}
