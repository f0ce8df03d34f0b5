//! `define_port_error!` declares a driven-port error enum whose variants all
//! carry named fields, plus one snake_case constructor per variant taking
//! `impl Into<_>` for each field in declaration order.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Construct [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum CounterPortError {
            Unreachable { message: String } => "counter unreachable: {message}",
            Exhausted { issued: i64 } => "counter exhausted after {issued}",
            Rejected { message: String, issued: i64 } => "rejected {issued}: {message}",
        }
    }

    #[rstest]
    #[case(CounterPortError::unreachable("timeout"), "counter unreachable: timeout")]
    #[case(CounterPortError::exhausted(9_i64), "counter exhausted after 9")]
    #[case(CounterPortError::rejected("negative", -1_i64), "rejected -1: negative")]
    fn constructors_format_their_fields(#[case] err: CounterPortError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn constructors_build_the_named_variant() {
        assert_eq!(
            CounterPortError::exhausted(3_i64),
            CounterPortError::Exhausted { issued: 3 }
        );
    }
}
