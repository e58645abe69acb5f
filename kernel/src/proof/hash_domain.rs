//! Typed domain separators for canonical hashing.
//!
//! Every digest computed in this workspace selects a domain via
//! [`HashDomain`]. The enum, `as_bytes()`, `ALL`, and `Display` are generated
//! from one macro invocation so they cannot drift apart.

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
    /// Ordered trace-event log of one search run.
    SearchTrace => b"ARBOR::SEARCH_TRACE::V1\0",

    /// Node/edge export of a branch-and-bound tree.
    SearchTree => b"ARBOR::SEARCH_TREE::V1\0",

    /// Complete report returned by a harness runner.
    RunReport => b"ARBOR::RUN_REPORT::V1\0",

    /// Run configuration (policies) a report was produced under.
    RunConfig => b"ARBOR::RUN_CONFIG::V1\0",
}
