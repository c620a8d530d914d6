//! End-to-end tests over the filter store, navigator, and listings feed.

use rundbok_model::{Course, CourseId, ProgrammeId, ProgrammeWithCourses};
use rundbok_search::query_string::criteria_from_query;
use rundbok_search::{
    AvailableProgrammes, FilterStore, Level, ListingFeed, LocationStore, MemoryLocation, Navigator,
    QueryString, RequestStatus,
};

fn catalogue() -> Vec<ProgrammeWithCourses> {
    vec![
        ProgrammeWithCourses {
            id: ProgrammeId(1),
            name: "Computer Science".to_string(),
            programme_code: "CDATE".to_string(),
            courses: vec![
                Course {
                    id: CourseId(10),
                    name: "Algorithms".to_string(),
                    course_code: "DD2350".to_string(),
                },
                Course {
                    id: CourseId(11),
                    name: "Operating Systems".to_string(),
                    course_code: "ID1206".to_string(),
                },
            ],
        },
        ProgrammeWithCourses {
            id: ProgrammeId(2),
            name: "Engineering Physics".to_string(),
            programme_code: "CTFYS".to_string(),
            courses: vec![Course {
                id: CourseId(20),
                name: "Mechanics".to_string(),
                course_code: "SG1112".to_string(),
            }],
        },
    ]
}

/// Store and location agree field for field after every action.
fn assert_in_lockstep(store: &FilterStore<MemoryLocation>) {
    let from_location = criteria_from_query(&QueryString::parse(&store.share_link()));
    assert_eq!(from_location.programme_id, store.criteria().programme_id);
    assert_eq!(from_location.course_id, store.criteria().course_id);
}

#[test]
fn drill_down_keeps_store_and_location_in_lockstep() {
    let mut store = FilterStore::new(MemoryLocation::new(""));
    let mut nav = Navigator::new();

    store.search(nav.select_programme(ProgrammeId(1)));
    assert_in_lockstep(&store);
    assert_eq!(store.share_link(), "programme_id=1");

    store.search(nav.select_course(CourseId(10)));
    assert_in_lockstep(&store);
    assert_eq!(store.share_link(), "programme_id=1&course_id=10");
    assert_eq!(
        nav.level(),
        Level::Courses {
            programme_id: ProgrammeId(1)
        }
    );
}

#[test]
fn back_always_clears_both_selections_everywhere() {
    let mut store = FilterStore::new(MemoryLocation::new("programme_id=1&course_id=10"));
    let mut nav = Navigator::new();
    nav.restore(store.criteria(), &catalogue());

    store.search(nav.back());

    assert!(nav.is_root());
    assert_eq!(store.criteria().programme_id, None);
    assert_eq!(store.criteria().course_id, None);
    assert_eq!(store.share_link(), "");
    assert_in_lockstep(&store);
}

#[test]
fn deep_link_restores_the_courses_level_with_the_right_courses() {
    // Select programme 2, "relaunch" with the saved location, and expect to
    // land on its course list without repeating the drill-down.
    let mut first_run = FilterStore::new(MemoryLocation::new(""));
    let mut nav = Navigator::new();
    first_run.search(nav.select_programme(ProgrammeId(2)));
    let saved = first_run.share_link();

    let store = FilterStore::new(MemoryLocation::new(saved));
    let mut available = AvailableProgrammes::new();
    let ticket = available.start().unwrap();
    available.settle(ticket.seq, Ok(catalogue()));

    let mut restored = Navigator::new();
    restored.restore(store.criteria(), available.programmes());

    assert_eq!(restored.current_programme(), Some(ProgrammeId(2)));
    let programme = available.find(ProgrammeId(2)).unwrap();
    let codes: Vec<&str> = programme
        .courses
        .iter()
        .map(|c| c.course_code.as_str())
        .collect();
    assert_eq!(codes, vec!["SG1112"]);
}

#[test]
fn feed_refreshes_on_revision_changes_and_drops_stale_results() {
    let mut store = FilterStore::new(MemoryLocation::new(""));
    let mut nav = Navigator::new();
    let mut feed = ListingFeed::new();

    store.search(nav.select_programme(ProgrammeId(1)));
    let first = feed.refresh(store.criteria()).unwrap();

    // A second click lands before the first fetch resolves.
    store.search(nav.select_course(CourseId(10)));
    let second = feed.refresh(store.criteria()).unwrap();

    assert!(feed.settle(second.seq, Ok(Vec::new())));
    assert!(!feed.settle(first.seq, Ok(Vec::new())));
    assert_eq!(feed.status(), RequestStatus::Success);
}

#[test]
fn pasted_share_link_is_adopted_without_an_echo_write() {
    let mut store = FilterStore::new(MemoryLocation::new(""));
    store.location_mut().write("programme_id=2&course_id=20");
    let writes = store.location().writes();

    store.location_changed();

    assert_eq!(store.criteria().programme_id, Some(ProgrammeId(2)));
    assert_eq!(store.criteria().course_id, Some(CourseId(20)));
    assert_eq!(store.location().writes(), writes);
    assert_in_lockstep(&store);
}
