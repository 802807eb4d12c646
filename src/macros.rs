// Table-generating macros for the modules under `services`. Each service
// module invokes `actions!` once at its root and `resources!` once inside its
// `resource` submodule.

/// Generates `PREFIX` and the service's `Action` enum.
///
/// Each entry is `Operation: AccessLevel,` where `AccessLevel` names a
/// variant of [`crate::iam::AccessLevel`]. The `All` wildcard variant is
/// always generated first, so entry order matches the enum discriminants.
macro_rules! actions {
    (
        service = $prefix:literal;
        $(
            $(#[$meta:meta])*
            $variant:ident: $level:ident,
        )+
    ) => {
        pub const PREFIX: &str = $prefix;

        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub enum Action {
            #[doc = concat!("`", $prefix, ":*`, every action of this service.")]
            All,
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl Action {
            pub const VARIANTS: &'static [Action] = &[Action::All, $(Action::$variant,)+];

            pub const ENTRIES: &'static [$crate::iam::ActionEntry] = &[
                $crate::iam::ActionEntry {
                    name: concat!($prefix, ":*"),
                    access_level: $crate::iam::AccessLevel::Wildcard,
                },
                $(
                    $crate::iam::ActionEntry {
                        name: concat!($prefix, ":", stringify!($variant)),
                        access_level: $crate::iam::AccessLevel::$level,
                    },
                )+
            ];

            pub const fn as_str(&self) -> &'static str {
                Self::ENTRIES[*self as usize].name
            }

            pub const fn access_level(&self) -> $crate::iam::AccessLevel {
                Self::ENTRIES[*self as usize].access_level
            }
        }

        impl $crate::iam::ServiceAction for Action {
            const PREFIX: &'static str = $prefix;
            const VARIANTS: &'static [Self] = Action::VARIANTS;

            fn as_str(&self) -> &'static str {
                Action::as_str(self)
            }

            fn access_level(&self) -> $crate::iam::AccessLevel {
                Action::access_level(self)
            }
        }

        impl AsRef<str> for Action {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for Action {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for Action {
            type Err = $crate::iam::ActionParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let name: $crate::iam::ActionName = s.parse()?;
                if !name.service().eq_ignore_ascii_case($prefix) {
                    return Err($crate::iam::ActionParseError::UnknownAction);
                }
                Action::VARIANTS.iter()
                    .copied()
                    .find(|action| action.as_str().eq_ignore_ascii_case(name.raw()))
                    .ok_or($crate::iam::ActionParseError::UnknownAction)
            }
        }
    };
}

/// Generates one builder struct and constructor function per resource type,
/// plus `RESOURCE_TYPES`.
///
/// Entries are `name => Builder { fields.. } = "template";`. The template is
/// the ARN format exactly as AWS documents it, with `{field}` placeholders.
macro_rules! resources {
    (
        service = $service:literal;
        $(
            $(#[$meta:meta])*
            $name:ident => $builder:ident { $($field:ident),+ $(,)? } = $template:literal;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $builder {
                $($field: Option<String>,)+
            }

            impl $builder {
                pub const RESOURCE_TYPE: $crate::aws::ResourceType = $crate::aws::ResourceType {
                    service: $service,
                    name: stringify!($name),
                    template: $template,
                    fields: &[$(stringify!($field)),+],
                };

                $(
                    pub fn $field(mut self, value: impl Into<String>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )+

                /// The ARN, with `*` in place of every field left unset or empty.
                pub fn build(&self) -> String {
                    $(let $field = $crate::aws::or_wildcard(self.$field.as_deref());)+
                    format!($template)
                }
            }

            impl ::std::fmt::Display for $builder {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&self.build())
                }
            }

            $(#[$meta])*
            pub fn $name() -> $builder {
                $builder::default()
            }
        )+

        pub const RESOURCE_TYPES: &[$crate::aws::ResourceType] = &[$($builder::RESOURCE_TYPE),+];
    };
}
