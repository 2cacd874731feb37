//! Property tests for participation bookkeeping.
//!
//! Arbitrary sequences of join / decline / cancel answers are replayed
//! through the store and checked against a simple model: each user's last
//! answer wins, nobody is in both lists, and the remaining slot count is
//! always derived from the participant count.

use std::collections::BTreeMap;

use chrono::{FixedOffset, TimeZone};
use proptest::prelude::*;
use uuid::Uuid;

use group_recruit::adapters::InMemoryRecruitmentStore;
use group_recruit::domain::foundation::{RecruitmentId, ScheduledAt, UserId};
use group_recruit::domain::recruitment::{Headcount, Recruitment};
use group_recruit::ports::RecruitmentStore;

const ORGANIZER: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Join,
    Decline,
    Cancel,
}

fn answer() -> impl Strategy<Value = Answer> {
    prop_oneof![Just(Answer::Join), Just(Answer::Decline), Just(Answer::Cancel)]
}

fn headcount() -> impl Strategy<Value = Headcount> {
    prop::sample::select(Headcount::ALL.to_vec())
}

fn seeded(headcount: Headcount) -> (InMemoryRecruitmentStore, RecruitmentId) {
    let store = InMemoryRecruitmentStore::new();
    let id = RecruitmentId::from_uuid(Uuid::from_u128(42));
    let at = FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2030, 1, 15, 21, 0, 0)
        .unwrap();
    store
        .create(Recruitment::new(
            id,
            UserId::new(ORGANIZER),
            headcount,
            [UserId::new(ORGANIZER)],
            ScheduledAt::from_datetime(at),
        ))
        .unwrap();
    (store, id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the last answer of each user decides where they end up
    #[test]
    fn prop_last_answer_wins(
        headcount in headcount(),
        answers in prop::collection::vec((1u64..8, answer()), 0..60),
    ) {
        let (store, id) = seeded(headcount);
        let mut model: BTreeMap<u64, Option<bool>> = BTreeMap::new();
        model.insert(ORGANIZER, Some(true));

        for (user, answer) in &answers {
            let user_id = UserId::new(*user);
            let snapshot = match answer {
                Answer::Join => store.set_participation(&id, user_id, true),
                Answer::Decline => store.set_participation(&id, user_id, false),
                Answer::Cancel => store.cancel_participation(&id, user_id),
            };
            prop_assert!(snapshot.is_some());

            let state = match answer {
                Answer::Join => Some(true),
                Answer::Decline => Some(false),
                Answer::Cancel => None,
            };
            model.insert(*user, state);
        }

        let snapshot = store.get(&id).unwrap();
        let expected_in: Vec<UserId> = model
            .iter()
            .filter(|(_, state)| **state == Some(true))
            .map(|(user, _)| UserId::new(*user))
            .collect();
        let expected_out: Vec<UserId> = model
            .iter()
            .filter(|(_, state)| **state == Some(false))
            .map(|(user, _)| UserId::new(*user))
            .collect();

        prop_assert_eq!(&snapshot.participants, &expected_in);
        prop_assert_eq!(&snapshot.non_participants, &expected_out);
    }

    /// Property: lists stay disjoint and slots stay derived after every step
    #[test]
    fn prop_lists_disjoint_and_slots_derived(
        headcount in headcount(),
        answers in prop::collection::vec((1u64..12, answer()), 0..80),
    ) {
        let (store, id) = seeded(headcount);

        for (user, answer) in answers {
            let user_id = UserId::new(user);
            let snapshot = match answer {
                Answer::Join => store.set_participation(&id, user_id, true),
                Answer::Decline => store.set_participation(&id, user_id, false),
                Answer::Cancel => store.cancel_participation(&id, user_id),
            }
            .unwrap();

            for user in &snapshot.participants {
                prop_assert!(!snapshot.non_participants.contains(user));
            }

            let expected_slots = u32::from(headcount.value())
                .saturating_sub(snapshot.participants.len() as u32);
            prop_assert_eq!(snapshot.remaining_slots, expected_slots);
            prop_assert_eq!(snapshot.organizer, UserId::new(ORGANIZER));
        }
    }

    /// Property: answers to a closed recruitment change nothing
    #[test]
    fn prop_closed_recruitment_ignores_answers(
        answers in prop::collection::vec((1u64..8, answer()), 1..20),
    ) {
        let (store, id) = seeded(Headcount::Five);
        prop_assert!(store.delete(&id));

        for (user, answer) in answers {
            let user_id = UserId::new(user);
            let snapshot = match answer {
                Answer::Join => store.set_participation(&id, user_id, true),
                Answer::Decline => store.set_participation(&id, user_id, false),
                Answer::Cancel => store.cancel_participation(&id, user_id),
            };
            prop_assert!(snapshot.is_none());
        }

        prop_assert!(store.is_empty());
    }
}
