//! Property tests for StructBase construction invariants

#[cfg(feature = "derive")]
mod property_tests {
    use proptest::prelude::*;
    use serde_json::json;
    use sugars_struct::{Arguments, StructBase, StructError};

    #[derive(Debug, Clone, PartialEq, StructBase)]
    struct Record {
        id: Option<i64>,
        label: String,
        tags: Vec<String>,
        active: bool,
    }

    #[derive(Debug, Clone)]
    struct Supplied {
        id: Option<i64>,
        label: Option<String>,
        tags: Option<Vec<String>>,
        active: Option<bool>,
    }

    impl Supplied {
        fn arguments(&self) -> Arguments {
            let mut args = Arguments::new();
            if let Some(id) = self.id {
                args.insert("id", id);
            }
            if let Some(label) = &self.label {
                args.insert("label", label.as_str());
            }
            if let Some(tags) = &self.tags {
                args.insert("tags", json!(tags));
            }
            if let Some(active) = self.active {
                args.insert("active", active);
            }
            args
        }

        fn expected(&self) -> Record {
            Record {
                id: self.id,
                label: self.label.clone().unwrap_or_default(),
                tags: self.tags.clone().unwrap_or_default(),
                active: self.active.unwrap_or_default(),
            }
        }
    }

    fn supplied() -> impl Strategy<Value = Supplied> {
        (
            proptest::option::of(any::<i64>()),
            proptest::option::of("[a-z ]{0,12}"),
            proptest::option::of(proptest::collection::vec("[a-z]{1,6}", 0..4)),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(id, label, tags, active)| Supplied {
                id,
                label,
                tags,
                active,
            })
    }

    fn undeclared_name() -> impl Strategy<Value = String> {
        "[a-z_]{1,10}".prop_filter("must not be a declared field", |name| {
            !Record::schema().contains(name)
        })
    }

    proptest! {
        #[test]
        fn test_declared_subset_always_constructs(supplied in supplied()) {
            let record = Record::construct(supplied.arguments()).unwrap();
            prop_assert_eq!(record, supplied.expected());
        }

        #[test]
        fn test_any_undeclared_name_fails(supplied in supplied(), name in undeclared_name()) {
            let mut args = supplied.arguments();
            args.insert(name.clone(), 1);
            let err = Record::construct(args).unwrap_err();
            prop_assert_eq!(
                err,
                StructError::UndeclaredField { type_name: "Record", field: name }
            );
        }

        #[test]
        fn test_assign_undeclared_always_fails(
            supplied in supplied(),
            name in undeclared_name(),
            value in any::<i64>(),
        ) {
            let mut record = Record::construct(supplied.arguments()).unwrap();
            let before = record.clone();
            for _ in 0..2 {
                let err = record.assign(&name, value).unwrap_err();
                prop_assert!(err.is_undeclared());
                prop_assert_eq!(err.field(), name.as_str());
            }
            prop_assert_eq!(record, before);
        }

        #[test]
        fn test_equal_arguments_build_equal_instances(supplied in supplied()) {
            let first = Record::construct(supplied.arguments()).unwrap();
            let second = Record::construct(supplied.arguments()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
