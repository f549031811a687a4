/// Accept a list of strings either as a sequence or as a single comma-separated string.
/// Whitespace around the separators is ignored and empty items are dropped.
pub mod serde_string_list {
    use serde::{
        de::{Error as SerdeError, SeqAccess, Visitor},
        ser::SerializeSeq,
        Deserializer, Serializer,
    };
    use std::{fmt, marker::PhantomData};

    pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
        value.split(',').map(str::trim).filter(|item| !item.is_empty())
    }

    struct StringListVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for StringListVisitor<T>
    where
        T: From<String>,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of strings or a comma-separated string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: SerdeError,
        {
            Ok(split_list(value).map(|item| T::from(item.to_owned())).collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element::<String>()? {
                items.push(T::from(item));
            }
            Ok(items)
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: From<String>,
    {
        deserializer.deserialize_any(StringListVisitor { marker: PhantomData })
    }

    pub fn serialize<S, T>(value: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str>,
    {
        let mut seq = serializer.serialize_seq(Some(value.len()))?;
        for item in value {
            seq.serialize_element(item.as_ref())?;
        }
        seq.end()
    }

    /// The same as the parent module for optional fields, use it with `#[serde(default)]`.
    pub mod option {
        use serde::{
            de::{Deserializer, Error as SerdeError, Visitor},
            Serializer,
        };
        use std::{fmt, marker::PhantomData};

        struct OptionVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for OptionVisitor<T>
        where
            T: From<String>,
        {
            type Value = Option<Vec<T>>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an optional list of strings or a comma-separated string")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: SerdeError,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: SerdeError,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                super::deserialize(deserializer).map(Some)
            }
        }

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
        where
            D: Deserializer<'de>,
            T: From<String>,
        {
            deserializer.deserialize_option(OptionVisitor { marker: PhantomData })
        }

        pub fn serialize<S, T>(value: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: AsRef<str>,
        {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
