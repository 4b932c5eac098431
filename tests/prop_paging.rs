use bson::Bson;
use bson_pipeline::stage::optional_paging_stage;
use proptest::prelude::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"))),
        .. proptest::test_runner::Config::default()
    })]
    #[test]
    fn prop_content_branch_skips_whole_pages(page in 0i64..10_000, size in 1i64..1_000) {
        let st = optional_paging_stage(Some(page), Some(size)).unwrap();
        let facet = st.get_document("$facet").unwrap();
        let content = facet.get_array("content").unwrap();
        prop_assert_eq!(content[0].as_document().unwrap().get_i64("$skip").unwrap(), page * size);
        prop_assert_eq!(content[1].as_document().unwrap().get_i64("$limit").unwrap(), size);

        let metadata = facet.get_array("metadata").unwrap();
        let flags = metadata[2].as_document().unwrap().get_document("$addFields").unwrap();
        prop_assert_eq!(flags.get("first"), Some(&Bson::Boolean(page == 0)));
    }

    #[test]
    fn prop_missing_value_means_no_stage(v in any::<i64>()) {
        prop_assert!(optional_paging_stage(Some(v), None).is_none());
        prop_assert!(optional_paging_stage(None, Some(v)).is_none());
    }
}
