//! Property tests: structural guarantees that hold for any input.

mod common;

use common::*;
use flowreport_core::*;
use flowreport_xml::constants::{attributes, tags};
use flowreport_xml::ResultsSerializer;
use proptest::prelude::*;

fn access_path_strategy() -> impl Strategy<Value = AccessPath> {
    (
        proptest::option::of("[a-z$][a-z0-9]{0,6}"),
        proptest::option::of("[A-Za-z.<>]{1,12}"),
        any::<bool>(),
        prop::collection::vec(("[a-z]{1,8}", "[A-Za-z.]{1,10}"), 0..5),
    )
        .prop_map(|(value, base_type, taint_sub_fields, fields)| AccessPath {
            plain_value: value,
            base_type,
            taint_sub_fields,
            fragments: fields
                .into_iter()
                .map(|(f, t)| AccessPathFragment::new(f, t))
                .collect(),
        })
}

proptest! {
    #[test]
    fn fields_block_iff_fragments(ap in access_path_strategy()) {
        let mut result = AnalysisResult::new();
        result.add_result(plain_sink("s1"), SourceRecord::new("s0", ap.clone(), Definition::default()));

        let root = render(&ResultsSerializer::new(compact_config()), &result);
        let node = root.child(tags::RESULTS).unwrap().children[0]
            .child(tags::SOURCES).unwrap()
            .children[0]
            .child(tags::ACCESS_PATH).unwrap()
            .clone();

        prop_assert_eq!(node.attr(attributes::VALUE), ap.plain_value.as_deref());
        prop_assert_eq!(node.attr(attributes::TYPE), ap.base_type.as_deref());
        prop_assert_eq!(
            node.attr(attributes::TAINT_SUB_FIELDS),
            Some(if ap.taint_sub_fields { "true" } else { "false" })
        );
        match node.child(tags::FIELDS) {
            None => prop_assert!(ap.fragments.is_empty()),
            Some(fields) => {
                prop_assert!(!ap.fragments.is_empty());
                let written: Vec<(&str, &str)> = fields
                    .children
                    .iter()
                    .map(|f| (f.attr(attributes::VALUE).unwrap(), f.attr(attributes::TYPE).unwrap()))
                    .collect();
                let expected: Vec<(&str, &str)> = ap
                    .fragments
                    .iter()
                    .map(|f| (f.field.as_str(), f.field_type.as_str()))
                    .collect();
                prop_assert_eq!(written, expected);
            }
        }
    }

    #[test]
    fn taint_path_length_is_preserved(n in 0usize..12) {
        let mut result = AnalysisResult::new();
        result.add_result(plain_sink("s1"), plain_source("s0").with_path(path_of(n)));

        let root = render(&ResultsSerializer::new(compact_config()), &result);
        let source = root.child(tags::RESULTS).unwrap().children[0]
            .child(tags::SOURCES).unwrap()
            .children[0]
            .clone();
        match source.child(tags::TAINT_PATH) {
            None => prop_assert_eq!(n, 0),
            Some(path) => {
                let statements: Vec<String> = path
                    .children
                    .iter()
                    .map(|e| e.attr(attributes::STATEMENT).unwrap().to_string())
                    .collect();
                let expected: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
                prop_assert_eq!(statements, expected);
            }
        }
    }

    #[test]
    fn performance_entries_in_fixed_order(values in prop::array::uniform7(-3i64..10)) {
        let mut perf = PerformanceData::new();
        for (metric, value) in Metric::ALL.iter().zip(values) {
            perf.set(*metric, value);
        }
        let mut result = AnalysisResult::new();
        result.set_performance_data(perf);

        let root = render(&ResultsSerializer::new(compact_config()), &result);
        let expected: Vec<(String, String)> = Metric::ALL
            .iter()
            .zip(values)
            .filter(|(_, v)| *v > 0)
            .map(|(m, v)| (m.token().to_string(), v.to_string()))
            .collect();

        match root.child(tags::PERFORMANCE_DATA) {
            None => prop_assert!(expected.is_empty()),
            Some(block) => {
                let written: Vec<(String, String)> = block
                    .children
                    .iter()
                    .map(|e| {
                        (
                            e.attr(attributes::NAME).unwrap().to_string(),
                            e.attr(attributes::VALUE).unwrap().to_string(),
                        )
                    })
                    .collect();
                prop_assert_eq!(written, expected);
            }
        }
    }

    #[test]
    fn results_block_iff_any_pair(sinks in 0usize..4, sources_per_sink in 0usize..3) {
        let mut result = AnalysisResult::new();
        for s in 0..sinks {
            result.add_sources(
                plain_sink(&format!("sink{s}")),
                (0..sources_per_sink).map(|i| plain_source(&format!("src{i}"))),
            );
        }
        let root = render(&ResultsSerializer::new(compact_config()), &result);
        let has_pairs = sinks > 0 && sources_per_sink > 0;
        prop_assert_eq!(root.child(tags::RESULTS).is_some(), has_pairs);
        if has_pairs {
            prop_assert_eq!(root.child(tags::RESULTS).unwrap().children.len(), sinks);
        }
    }
}
