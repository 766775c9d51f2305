//! Tests for scalar custom types over a text domain
//!
//! Models `CREATE DOMAIN public.email AS text`: the server reports the base
//! type, so values arrive as text and are turned into application types
//! either by request or through the type map.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pgudt::constants::oid;
use pgudt::udt::{self, MappedValue};
use pgudt::{
    access, ConnectionContext, CustomTypeHandle, Error, ErrorKind, ScalarValue,
    SingleAttributeInput, SqlData, UdtMap,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Email(String);

impl SqlData for Email {
    fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
        self.0 = input.read_string()?.unwrap_or_default();
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Port(i32);

impl SqlData for Port {
    fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
        self.0 = input.read_int()?;
        Ok(())
    }
}

fn email_map() -> UdtMap {
    let mut map = UdtMap::new();
    map.register("public.email", CustomTypeHandle::of::<Email>());
    map
}

fn text(value: impl Into<ScalarValue>) -> Box<dyn pgudt::ValueAccess> {
    access::for_value(oid::TEXT, value.into(), ConnectionContext::default())
}

mod requested_type_tests {
    use super::*;

    #[test]
    fn test_email_from_domain() {
        let email: Option<Email> = udt::materialize_as(
            &email_map(),
            "public.email",
            &CustomTypeHandle::of::<Email>(),
            text("a@b.com"),
        )
        .unwrap();
        assert_eq!(email, Some(Email("a@b.com".to_string())));
    }

    #[test]
    fn test_null_domain_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = CustomTypeHandle::with_factory(move || -> Result<Email, String> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Email::default())
        });

        let email: Option<Email> =
            udt::materialize_as(&email_map(), "public.email", &handle, text(ScalarValue::Null))
                .unwrap();
        assert_eq!(email, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_email_value_as_port() {
        let mut map = email_map();
        map.register("\"Port\"", CustomTypeHandle::of::<Port>());

        let err = udt::materialize_as::<Port>(
            &map,
            "public.email",
            &CustomTypeHandle::of::<Port>(),
            text("a@b.com"),
        )
        .unwrap_err();
        assert!(err.is_data_error());
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn test_structured_type_not_supported() {
        let mut input = SingleAttributeInput::new(text("a@b.com"));
        let err = udt::resolve_and_materialize(
            &email_map(),
            "public.email",
            &CustomTypeHandle::structured("app::Address"),
            &mut input,
        )
        .unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(err.sql_state(), "0A000");
        assert_eq!(
            err.to_string(),
            "custom type does not implement SqlData: app::Address"
        );
    }

    #[test]
    fn test_factory_failure_carries_cause() {
        let handle = CustomTypeHandle::with_factory(|| -> Result<Email, std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "mailbox offline"))
        });
        let err = udt::materialize_as::<Email>(&email_map(), "public.email", &handle, text("a@b.com"))
            .unwrap_err();

        assert!(err.is_system_error());
        assert!(matches!(err, Error::Construction { .. }));
        let source = std::error::Error::source(&err).expect("construction error should have a source");
        assert_eq!(source.to_string(), "mailbox offline");
    }
}

mod type_map_tests {
    use super::*;

    #[test]
    fn test_text_mapping_overrides_base_type() {
        let mut map = UdtMap::new();
        map.register("text", CustomTypeHandle::of::<Email>());

        match udt::get_object(&map, "text", text("a@b.com")).unwrap() {
            MappedValue::Custom(obj) => {
                let email = obj.downcast::<Email>().unwrap();
                assert_eq!(*email, Email("a@b.com".to_string()));
            }
            other => panic!("expected a custom value, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_map_returns_base_text() {
        let value = udt::get_object(&UdtMap::new(), "text", text("a@b.com")).unwrap();
        assert_eq!(value.as_base(), Some(&ScalarValue::from("a@b.com")));
        assert!(value.as_custom::<Email>().is_none());
    }

    #[test]
    fn test_null_with_mapping() {
        let mut map = UdtMap::new();
        map.register("text", CustomTypeHandle::of::<Email>());
        assert!(udt::get_object(&map, "text", text(ScalarValue::Null))
            .unwrap()
            .is_null());
    }
}

mod contract_tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Silent;

    impl SqlData for Silent {
        fn read_sql(&mut self, _input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct Pair(Option<String>, i32);

    impl SqlData for Pair {
        fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
            self.0 = input.read_string()?;
            self.1 = input.read_int()?;
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct KeepsFirst(Option<String>);

    impl SqlData for KeepsFirst {
        fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
            self.0 = input.read_string()?;
            let _ = input.read_int();
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct FallsBackToText(Option<String>);

    impl SqlData for FallsBackToText {
        fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
            if input.read_int().is_err() {
                self.0 = input.read_string()?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct SwallowsFailure;

    impl SqlData for SwallowsFailure {
        fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
            let _ = input.read_int();
            Ok(())
        }
    }

    #[test]
    fn test_swallowed_second_read_is_not_implemented() {
        let mut input = SingleAttributeInput::new(text("a@b.com"));
        let err = udt::materialize("public.email", &CustomTypeHandle::of::<KeepsFirst>(), &mut input)
            .unwrap_err();
        assert!(err.is_not_implemented());
        assert!(matches!(err, Error::MultipleAttributes { attempt: 2 }));
    }

    #[test]
    fn test_read_after_failed_read_is_not_implemented() {
        let err = udt::materialize_as::<FallsBackToText>(
            &UdtMap::new(),
            "public.email",
            &CustomTypeHandle::of::<FallsBackToText>(),
            text("a@b.com"),
        )
        .unwrap_err();
        assert!(err.is_not_implemented());
        assert!(matches!(err, Error::MultipleAttributes { attempt: 2 }));
    }

    #[test]
    fn test_swallowed_failed_read_is_data_error() {
        let mut input = SingleAttributeInput::new(text("a@b.com"));
        let err = udt::materialize("public.email", &CustomTypeHandle::of::<SwallowsFailure>(), &mut input)
            .unwrap_err();
        assert!(err.is_data_error());
        assert!(matches!(err, Error::NoAttributesRead { .. }));
    }

    #[test]
    fn test_zero_reads_is_data_error() {
        let mut input = SingleAttributeInput::new(text("a@b.com"));
        let err = udt::materialize("public.email", &CustomTypeHandle::of::<Silent>(), &mut input)
            .unwrap_err();
        assert!(err.is_data_error());
        assert!(err.to_string().starts_with("no attributes read by custom type instance of"));
    }

    #[test]
    fn test_two_reads_is_not_implemented() {
        let mut input = SingleAttributeInput::new(text("a@b.com"));
        let err = udt::materialize("public.email", &CustomTypeHandle::of::<Pair>(), &mut input)
            .unwrap_err();
        assert!(err.is_not_implemented());
        assert!(matches!(err, Error::MultipleAttributes { attempt: 2 }));
    }
}
