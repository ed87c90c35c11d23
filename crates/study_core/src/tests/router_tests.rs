use super::*;

#[test]
fn starts_unauthenticated_on_pricing() {
    let router = ViewRouter::new();
    assert_eq!(router.current_view(), ViewId::Pricing);
    assert!(!router.is_authenticated());
}

#[test]
fn starting_on_a_gated_view_falls_back_to_pricing() {
    assert_eq!(
        ViewRouter::starting_at(ViewId::Library).current_view(),
        ViewId::Pricing
    );
    assert_eq!(
        ViewRouter::starting_at(ViewId::Landing).current_view(),
        ViewId::Landing
    );
}

#[test]
fn gated_views_never_render_while_logged_out() {
    for view in ViewId::ALL.iter().copied().filter(|v| !v.is_public()) {
        let mut router = ViewRouter::new();
        let outcome = router.navigate_to(view);
        assert_eq!(outcome, NavigationOutcome::RequiresLogin { requested: view });
        assert!(router.current_view().is_public(), "{view} leaked");
    }
}

#[test]
fn public_views_are_free_siblings() {
    let mut router = ViewRouter::new();
    let outcome = router.navigate_to(ViewId::Landing);
    assert_eq!(
        outcome,
        NavigationOutcome::Moved {
            from: ViewId::Pricing,
            to: ViewId::Landing
        }
    );
    assert_eq!(router.navigate_to(ViewId::Landing), NavigationOutcome::Unchanged);
}

#[test]
fn login_always_lands_on_dashboard() {
    for start in [ViewId::Landing, ViewId::Pricing] {
        let mut router = ViewRouter::starting_at(start);
        assert_eq!(router.login(), ViewId::Dashboard);
        assert_eq!(router.current_view(), ViewId::Dashboard);
        assert!(router.is_authenticated());
    }
}

#[test]
fn logout_always_returns_to_pricing() {
    let mut router = ViewRouter::new();
    router.login();
    assert!(router.navigate_to(ViewId::Calendar).moved());
    assert_eq!(router.logout(), ViewId::Pricing);
    assert_eq!(router.current_view(), ViewId::Pricing);
    assert!(!router.is_authenticated());
}

#[test]
fn authenticated_session_cannot_wander_into_public_views() {
    let mut router = ViewRouter::new();
    router.login();
    assert_eq!(
        router.navigate_to(ViewId::Pricing),
        NavigationOutcome::RequiresLogout {
            requested: ViewId::Pricing
        }
    );
    assert_eq!(router.current_view(), ViewId::Dashboard);
}

#[test]
fn login_library_logout_scenario() {
    let mut router = ViewRouter::new();
    assert_eq!(router.current_view(), ViewId::Pricing);

    router.login();
    assert_eq!(router.current_view(), ViewId::Dashboard);
    assert!(router.is_authenticated());

    router.navigate_to(ViewId::Library);
    assert_eq!(router.current_view(), ViewId::Library);

    router.logout();
    assert_eq!(router.current_view(), ViewId::Pricing);
    assert!(!router.is_authenticated());

    router.navigate_to(ViewId::Library);
    assert_eq!(router.current_view(), ViewId::Pricing);
}
