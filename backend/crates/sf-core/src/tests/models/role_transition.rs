use crate::{CoreError, Role, RoleTransition};

#[test]
fn given_customer_when_promoted_then_becomes_franchise() {
    let result = RoleTransition::PromoteToFranchise.apply(Role::Customer);

    assert_eq!(result.unwrap(), Role::Franchise);
}

#[test]
fn given_franchise_when_demoted_then_becomes_customer() {
    let result = RoleTransition::DemoteToCustomer.apply(Role::Franchise);

    assert_eq!(result.unwrap(), Role::Customer);
}

#[test]
fn given_any_other_source_when_transitioned_then_invalid_transition() {
    for transition in [
        RoleTransition::PromoteToFranchise,
        RoleTransition::DemoteToCustomer,
    ] {
        for role in Role::ALL.into_iter().filter(|r| *r != transition.source()) {
            let result = transition.apply(role);
            assert!(
                matches!(result, Err(CoreError::InvalidTransition { current, .. }) if current == role),
                "{transition:?} from {role} should fail"
            );
        }
    }
}
