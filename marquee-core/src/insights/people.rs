use marquee_model::{CastCredit, EnrichedReference, PersonRole, PersonTally};

use super::tally::OrderedTally;

/// Only this many top-billed cast members per title are counted, so that
/// long tails of extras do not dominate the ranking.
pub const TOP_BILLED_CAST: usize = 5;

const DIRECTOR_JOB: &str = "Director";

/// Most frequent actors across `items`, counting each title's top-billed
/// cast only.
pub fn top_actors(items: &[EnrichedReference], limit: usize) -> Vec<PersonTally> {
    let mut tally = OrderedTally::new();

    for item in items {
        let Some(credit) = item.credit() else {
            continue;
        };
        let mut billed: Vec<&CastCredit> = credit.cast.iter().collect();
        billed.sort_by_key(|member| member.billing_order);

        for member in billed.into_iter().take(TOP_BILLED_CAST) {
            record(
                &mut tally,
                member.person_id,
                &member.name,
                member.profile_path.as_deref(),
                PersonRole {
                    title: item.title().to_string(),
                    role: member.character.clone(),
                },
            );
        }
    }

    rank(tally, limit)
}

/// Most frequent directors across `items`. Every crew entry with the
/// `Director` job counts.
pub fn top_directors(
    items: &[EnrichedReference],
    limit: usize,
) -> Vec<PersonTally> {
    let mut tally = OrderedTally::new();

    for item in items {
        let Some(credit) = item.credit() else {
            continue;
        };
        for member in credit.crew.iter().filter(|m| m.job == DIRECTOR_JOB) {
            record(
                &mut tally,
                member.person_id,
                &member.name,
                member.profile_path.as_deref(),
                PersonRole {
                    title: item.title().to_string(),
                    role: member.job.clone(),
                },
            );
        }
    }

    rank(tally, limit)
}

fn record(
    tally: &mut OrderedTally<u64, PersonTally>,
    person_id: u64,
    name: &str,
    profile_path: Option<&str>,
    role: PersonRole,
) {
    // Name and portrait stick to the first appearance.
    let entry = tally.entry_or_insert_with(person_id, || PersonTally {
        person_id,
        name: name.to_string(),
        profile_path: profile_path.map(str::to_string),
        count: 0,
        roles: Vec::new(),
    });
    entry.count += 1;
    entry.roles.push(role);
}

fn rank(tally: OrderedTally<u64, PersonTally>, limit: usize) -> Vec<PersonTally> {
    let mut people = tally.into_entries();
    people.sort_by(|a, b| b.count.cmp(&a.count));
    people.truncate(limit);
    people
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{cast, crew, reference, with_credit};

    #[test]
    fn cast_outside_top_five_billing_is_ignored() {
        let first = with_credit(
            reference(1, "First"),
            vec![cast(42, "Lead", 0)],
            vec![],
        );
        let mut crowded: Vec<_> = (0..6)
            .map(|order| cast(100 + u64::from(order), "Other", order))
            .collect();
        crowded.push(cast(42, "Lead", 6));
        let second = with_credit(reference(2, "Second"), crowded, vec![]);

        let actors = top_actors(&[first, second], 50);

        let lead = actors
            .iter()
            .find(|p| p.person_id == 42)
            .expect("lead counted");
        assert_eq!(lead.count, 1);
        assert_eq!(lead.roles.len(), 1);
        assert_eq!(lead.roles[0].title, "First");
    }

    #[test]
    fn billing_is_sorted_before_taking_top_five() {
        // Listed out of order; person 9 is billed first.
        let members = vec![
            cast(1, "a", 5),
            cast(2, "b", 4),
            cast(3, "c", 3),
            cast(4, "d", 2),
            cast(5, "e", 1),
            cast(9, "star", 0),
        ];
        let item = with_credit(reference(1, "T"), members, vec![]);

        let ids: Vec<u64> = top_actors(&[item], 10).iter().map(|p| p.person_id).collect();
        assert!(ids.contains(&9));
        assert!(!ids.contains(&1));
        assert_eq!(ids.len(), TOP_BILLED_CAST);
    }

    #[test]
    fn ties_keep_first_encountered_order_and_limit_applies() {
        let items = vec![
            with_credit(
                reference(1, "One"),
                vec![cast(30, "C", 0), cast(10, "A", 1)],
                vec![],
            ),
            with_credit(
                reference(2, "Two"),
                vec![cast(20, "B", 0), cast(10, "A", 1)],
                vec![],
            ),
            with_credit(
                reference(3, "Three"),
                vec![cast(20, "B", 0), cast(30, "C", 1)],
                vec![],
            ),
        ];

        let actors = top_actors(&items, 2);

        let ids: Vec<u64> = actors.iter().map(|p| p.person_id).collect();
        // All three have count 2; first seen were 30 then 10 then 20.
        assert_eq!(ids, vec![30, 10]);
    }

    #[test]
    fn first_appearance_fixes_name_and_profile() {
        let mut renamed = cast(7, "Later Name", 0);
        renamed.profile_path = Some("/later.jpg".into());
        let items = vec![
            with_credit(reference(1, "One"), vec![cast(7, "Early Name", 0)], vec![]),
            with_credit(reference(2, "Two"), vec![renamed], vec![]),
        ];

        let actors = top_actors(&items, 10);
        assert_eq!(actors[0].name, "Early Name");
        assert_eq!(actors[0].profile_path.as_deref(), Some("/7.jpg"));
        assert_eq!(actors[0].count, 2);
        assert_eq!(actors[0].roles[1].title, "Two");
        assert_eq!(actors[0].roles[1].role, "Later Name role");
    }

    #[test]
    fn directors_count_every_director_credit() {
        let items = vec![
            with_credit(
                reference(1, "Duo"),
                vec![],
                vec![
                    crew(1, "Joel", "Director"),
                    crew(2, "Ethan", "Director"),
                    crew(3, "Roger", "Director of Photography"),
                ],
            ),
            with_credit(reference(2, "Solo"), vec![], vec![crew(2, "Ethan", "Director")]),
        ];

        let directors = top_directors(&items, 10);

        let ids: Vec<u64> = directors.iter().map(|p| p.person_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(directors[0].count, 2);
        assert_eq!(directors[0].roles[0].role, "Director");
    }

    #[test]
    fn items_without_credits_contribute_nothing() {
        assert!(top_actors(&[], 10).is_empty());
        assert!(top_directors(&[], 10).is_empty());
    }
}
