//! Property tests for the location codec.

use proptest::prelude::*;

use rundbok_model::{CourseId, ProgrammeId, SearchCriteria};
use rundbok_search::QueryString;
use rundbok_search::query_string::{criteria_from_query, write_criteria};

fn criteria_strategy() -> impl Strategy<Value = SearchCriteria> {
    (
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
    )
        .prop_map(|(programme, course)| SearchCriteria {
            programme_id: programme.map(ProgrammeId),
            course_id: course.map(CourseId),
            query_text: None,
        })
}

proptest! {
    /// parse(serialize(criteria)) == criteria for any reachable criteria.
    #[test]
    fn criteria_round_trip(criteria in criteria_strategy()) {
        let mut query = QueryString::default();
        write_criteria(&mut query, &criteria);
        let parsed = criteria_from_query(&QueryString::parse(&query.serialize()));
        prop_assert_eq!(parsed, criteria);
    }

    /// serialize(parse(qs)) == qs for well-formed strings over the two
    /// filter keys.
    #[test]
    fn raw_query_round_trip(programme in any::<u64>(), course in any::<u64>()) {
        let raw = format!("programme_id={programme}&course_id={course}");
        prop_assert_eq!(QueryString::parse(&raw).serialize(), raw);
    }

    /// Unrelated keys survive arbitrary criteria rewrites.
    #[test]
    fn unrelated_keys_are_preserved(
        key in "[a-z]{1,8}",
        value in "[a-z0-9]{0,8}",
        criteria in criteria_strategy(),
    ) {
        prop_assume!(key != "programme_id" && key != "course_id");

        let mut query = QueryString::parse(&format!("{key}={value}"));
        write_criteria(&mut query, &criteria);
        prop_assert_eq!(query.get(&key), Some(value.as_str()));
    }
}
