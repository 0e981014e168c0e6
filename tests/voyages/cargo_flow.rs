//! Loading, unloading and ownership transfer through the harbor

use crate::common::*;
use seaway::{
    CapacityPolicy, CapacityViolation, Category, ContainerId, Error, PortId, SeawayConfig,
    SizeClass, Vessel, VesselId,
};
use std::collections::BTreeSet;

fn cargo_ids(harbor: &seaway::Harbor, vessel: VesselId) -> BTreeSet<ContainerId> {
    harbor
        .with_vessel(vessel, |v| v.cargo().iter().map(|c| c.id()).collect())
        .unwrap()
}

#[test]
fn test_overweight_container_comes_back() {
    let harbor = coastal_harbor();
    harbor
        .commission(SizeClass::Light, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    harbor.load(VesselId::new(1), basic(1, 3000)).unwrap();
    harbor.load(VesselId::new(1), basic(2, 3000)).unwrap();
    let before = cargo_ids(&harbor, VesselId::new(1));

    let failure = harbor.load(VesselId::new(1), basic(3, 2000)).unwrap_err();
    assert!(!failure.is_hard_stop());
    assert_eq!(
        failure.error,
        Error::CapacityExceeded(CapacityViolation::Weight {
            attempted: 8000,
            capacity: 7500
        })
    );
    assert_eq!(failure.into_container(), basic(3, 2000));
    assert_eq!(cargo_ids(&harbor, VesselId::new(1)), before);

    // A lighter one still fits.
    harbor.load(VesselId::new(1), basic(4, 1500)).unwrap();
}

#[test]
fn test_full_vessel_is_a_hard_stop() {
    let harbor = coastal_harbor();
    harbor
        .commission(SizeClass::Heavy, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    for id in 0..5 {
        harbor.load(VesselId::new(1), basic(id, 100)).unwrap();
    }

    let failure = harbor.load(VesselId::new(1), basic(99, 1)).unwrap_err();
    assert!(failure.is_hard_stop());
    assert!(!failure.error.is_retryable());
    assert_eq!(
        failure.error,
        Error::CapacityExceeded(CapacityViolation::Full { max: 5 })
    );
}

#[test]
fn test_medium_class_category_limits() {
    let harbor = coastal_harbor();
    harbor
        .commission(SizeClass::Medium, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    harbor.load(VesselId::new(1), refrigerated(1, 3500)).unwrap();

    let failure = harbor
        .load(VesselId::new(1), refrigerated(2, 3500))
        .unwrap_err();
    assert_eq!(
        failure.error,
        Error::CapacityExceeded(CapacityViolation::Category {
            category: Category::Refrigerated,
            max: 1
        })
    );

    harbor.load(VesselId::new(1), liquid(3, 3500)).unwrap();
    let failure = harbor.load(VesselId::new(1), heavy(4, 3500)).unwrap_err();
    assert_eq!(
        failure.error,
        Error::CapacityExceeded(CapacityViolation::Category {
            category: Category::Heavy,
            max: 2
        })
    );
}

#[test]
fn test_totals_only_admission_ignores_categories() {
    let harbor = coastal_harbor_with(SeawayConfig {
        enforce_category_limits: false,
        ..SeawayConfig::default()
    });
    harbor
        .commission(SizeClass::Light, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    harbor.load(VesselId::new(1), heavy(1, 3500)).unwrap();
    harbor.load(VesselId::new(1), liquid(2, 3500)).unwrap();
    assert!(harbor
        .load(VesselId::new(1), liquid(3, 3500))
        .unwrap_err()
        .error
        .is_retryable());
}

#[test]
fn test_unload_reload_round_trip() {
    let harbor = coastal_harbor();
    harbor
        .add_vessel(Vessel::new(
            VesselId::new(1),
            PortId::new(1),
            0.0,
            CapacityPolicy::new(20_000, 10, 5, 5, 5),
            1.0,
        )
        .unwrap())
        .unwrap();
    harbor.load(VesselId::new(1), basic(1, 1000)).unwrap();
    harbor.load(VesselId::new(1), heavy(2, 4000)).unwrap();
    harbor.load(VesselId::new(1), liquid(3, 4000)).unwrap();
    let before = cargo_ids(&harbor, VesselId::new(1));

    harbor.unload_here(VesselId::new(1), ContainerId::new(2)).unwrap();
    assert!(!cargo_ids(&harbor, VesselId::new(1)).contains(&ContainerId::new(2)));
    assert!(harbor.port(PortId::new(1)).unwrap().stores(ContainerId::new(2)));

    harbor.load_from_port(VesselId::new(1), ContainerId::new(2)).unwrap();
    assert_eq!(cargo_ids(&harbor, VesselId::new(1)), before);
    assert!(harbor.port(PortId::new(1)).unwrap().storage().is_empty());
}

#[test]
fn test_unload_missing_container_is_recoverable() {
    let harbor = coastal_harbor();
    harbor
        .commission(SizeClass::Medium, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    harbor.load(VesselId::new(1), basic(1, 1000)).unwrap();

    let err = harbor
        .unload(VesselId::new(1), ContainerId::new(404), PortId::new(2))
        .unwrap_err();
    assert_eq!(
        err,
        Error::ContainerNotFound {
            vessel: VesselId::new(1),
            container: ContainerId::new(404)
        }
    );
    assert!(err.is_retryable());
    assert_eq!(cargo_ids(&harbor, VesselId::new(1)).len(), 1);
    assert!(harbor.port(PortId::new(2)).unwrap().storage().is_empty());
}

#[test]
fn test_containers_travel_with_the_vessel() {
    let harbor = coastal_harbor();
    harbor
        .commission(SizeClass::Heavy, VesselId::new(1), PortId::new(1), 1.0e9)
        .unwrap();
    harbor.load(VesselId::new(1), heavy(1, 4000)).unwrap();
    harbor.sail(VesselId::new(1), PortId::new(2)).unwrap();
    harbor.unload_here(VesselId::new(1), ContainerId::new(1)).unwrap();

    assert!(harbor.port(PortId::new(2)).unwrap().stores(ContainerId::new(1)));
    assert!(!harbor.port(PortId::new(1)).unwrap().stores(ContainerId::new(1)));
    assert!(harbor
        .with_vessel(VesselId::new(1), |v| v.cargo().is_empty())
        .unwrap());
}
