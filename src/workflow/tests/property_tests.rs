//! Property tests for totality and determinism of policy queries.

use crate::workflow::{
    domain::{Role, Status, Transition},
    policy::WorkflowPolicy,
};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = Status> {
    proptest::sample::select(Status::ALL.to_vec())
}

fn arb_role() -> impl Strategy<Value = Role> {
    proptest::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn queries_are_order_stable_and_repeatable(current in arb_status(), role in arb_role()) {
        let policy = WorkflowPolicy::standard();
        let first = policy.available_transitions(current, role);
        let second = policy.available_transitions(current, role);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.windows(2).all(|pair| pair[0].value < pair[1].value));
        prop_assert!(first.iter().all(|option| option.value != current));
    }

    #[test]
    fn string_role_matches_typed_role(current in arb_status(), role in arb_role()) {
        let policy = WorkflowPolicy::standard();
        prop_assert_eq!(
            policy.available_transitions_for(current, role.as_str()),
            policy.available_transitions(current, role)
        );
    }

    #[test]
    fn arbitrary_role_strings_never_panic(current in arb_status(), role in ".{0,24}") {
        let policy = WorkflowPolicy::standard();
        let options = policy.available_transitions_for(current, &role);
        if Role::try_from(role.as_str()).is_err() {
            prop_assert!(options.is_empty());
        }
    }

    #[test]
    fn commit_requirement_depends_only_on_target(
        from_a in arb_status(),
        from_b in arb_status(),
        to in arb_status(),
    ) {
        let policy = WorkflowPolicy::standard();
        let a = policy.requirements(Transition::new(from_a, to));
        let b = policy.requirements(Transition::new(from_b, to));
        prop_assert_eq!(a.commit_id_required, b.commit_id_required);
    }

    #[test]
    fn comment_requirement_depends_only_on_source(
        from in arb_status(),
        to_a in arb_status(),
        to_b in arb_status(),
    ) {
        let policy = WorkflowPolicy::standard();
        prop_assert_eq!(
            policy.requires_comment(from, to_a),
            policy.requires_comment(from, to_b)
        );
    }
}
