//! Worked voyage scenarios

use crate::common::*;
use seaway::{
    haversine_km, CapacityPolicy, ContainerId, Error, PortId, Vessel, VesselId,
};

#[test]
fn test_coastal_hop_with_one_basic_container() {
    let harbor = coastal_harbor();
    harbor
        .add_vessel(Vessel::new(
            VesselId::new(1),
            PortId::new(1),
            100_000.0,
            CapacityPolicy::new(10_000, 10, 3, 3, 3),
            1.1,
        )
        .unwrap())
        .unwrap();
    harbor.load(VesselId::new(1), basic(101, 1000)).unwrap();

    let (a, b) = coastal_ports();
    let distance = haversine_km(&a.location(), &b.location());
    assert!((distance - 6.2012).abs() < 1e-3);
    let required = distance * (1.1 + 2500.0);

    let remaining = harbor.sail(VesselId::new(1), PortId::new(2)).unwrap();
    assert_eq!(remaining, 100_000.0 - required);
    assert!((remaining - 84_490.14).abs() < 0.01);

    let origin = harbor.port(PortId::new(1)).unwrap();
    let destination = harbor.port(PortId::new(2)).unwrap();
    assert!(!origin.is_docked(VesselId::new(1)));
    assert!(origin.has_departed(VesselId::new(1)));
    assert!(destination.is_docked(VesselId::new(1)));
}

#[test]
fn test_insufficient_fuel_leaves_everything_unchanged() {
    let harbor = coastal_harbor();
    harbor
        .add_vessel(Vessel::new(
            VesselId::new(1),
            PortId::new(1),
            15_000.0,
            CapacityPolicy::new(10_000, 10, 3, 3, 3),
            1.1,
        )
        .unwrap())
        .unwrap();
    harbor.load(VesselId::new(1), basic(101, 1000)).unwrap();

    let vessel_before = harbor.vessel(VesselId::new(1)).unwrap();
    let a_before = harbor.port(PortId::new(1)).unwrap();
    let b_before = harbor.port(PortId::new(2)).unwrap();

    let err = harbor.sail(VesselId::new(1), PortId::new(2)).unwrap_err();
    assert!(err.is_retryable());
    match err {
        Error::InsufficientFuel {
            required,
            available,
        } => {
            assert_eq!(available, 15_000.0);
            assert!(required > available);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(harbor.vessel(VesselId::new(1)).unwrap(), vessel_before);
    assert_eq!(harbor.port(PortId::new(1)).unwrap(), a_before);
    assert_eq!(harbor.port(PortId::new(2)).unwrap(), b_before);

    // Retryable once topped up.
    harbor.refuel(VesselId::new(1), 1_000.0).unwrap();
    harbor.sail(VesselId::new(1), PortId::new(2)).unwrap();
}

#[test]
fn test_sail_to_current_port_is_informational_noop() {
    let harbor = coastal_harbor();
    harbor
        .commission(seaway::SizeClass::Light, VesselId::new(1), PortId::new(1), 50.0)
        .unwrap();
    let before = harbor.vessel(VesselId::new(1)).unwrap();
    let port_before = harbor.port(PortId::new(1)).unwrap();

    let err = harbor.sail(VesselId::new(1), PortId::new(1)).unwrap_err();
    assert_eq!(
        err,
        Error::NoOpVoyage {
            vessel: VesselId::new(1),
            port: PortId::new(1)
        }
    );
    assert!(err.is_informational());
    assert_eq!(harbor.vessel(VesselId::new(1)).unwrap(), before);
    assert_eq!(harbor.port(PortId::new(1)).unwrap(), port_before);
}

/// Two ships leave the same port, one unloads at the destination and refuels.
#[test]
fn test_two_ship_delivery_run() {
    let harbor = coastal_harbor();
    harbor
        .add_vessel(Vessel::new(
            VesselId::new(1),
            PortId::new(1),
            1.0e11,
            CapacityPolicy::new(10_000, 10, 3, 3, 3),
            1.1,
        )
        .unwrap())
        .unwrap();
    harbor
        .add_vessel(Vessel::new(
            VesselId::new(2),
            PortId::new(1),
            3.0e7,
            CapacityPolicy::new(10_000, 8, 2, 2, 2),
            1.3,
        )
        .unwrap())
        .unwrap();

    harbor.load(VesselId::new(1), basic(101, 1000)).unwrap();
    harbor.load(VesselId::new(1), heavy(111, 3500)).unwrap();
    harbor.load(VesselId::new(1), heavy(112, 3500)).unwrap();
    harbor.load(VesselId::new(2), basic(102, 2000)).unwrap();

    harbor.sail(VesselId::new(1), PortId::new(2)).unwrap();
    harbor.sail(VesselId::new(2), PortId::new(2)).unwrap();

    let destination = harbor.port(PortId::new(2)).unwrap();
    assert_eq!(
        destination.docked().collect::<Vec<_>>(),
        vec![VesselId::new(1), VesselId::new(2)]
    );
    assert_eq!(harbor.port(PortId::new(1)).unwrap().departed().count(), 2);

    harbor.unload_here(VesselId::new(1), ContainerId::new(101)).unwrap();
    let fuel_before = harbor.vessel(VesselId::new(1)).unwrap().fuel();
    let fuel_after = harbor.refuel(VesselId::new(1), 5000.0).unwrap();
    assert_eq!(fuel_after, fuel_before + 5000.0);

    let storage = harbor.port(PortId::new(2)).unwrap();
    assert_eq!(storage.storage().len(), 1);
    assert_eq!(storage.storage()[0].id(), ContainerId::new(101));

    let ship = harbor.vessel(VesselId::new(1)).unwrap();
    let ids: Vec<_> = ship.containers_by_id().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![ContainerId::new(111), ContainerId::new(112)]);
}

#[test]
fn test_heavier_cargo_burns_more() {
    let harbor = coastal_harbor();
    for id in 1..=2 {
        harbor
            .add_vessel(Vessel::new(
                VesselId::new(id),
                PortId::new(1),
                1.0e9,
                CapacityPolicy::new(50_000, 10, 5, 5, 5),
                2.0,
            )
            .unwrap())
            .unwrap();
    }
    harbor.load(VesselId::new(1), heavy(1, 4000)).unwrap();
    harbor.load(VesselId::new(2), refrigerated(2, 4000)).unwrap();

    let light = harbor.sail(VesselId::new(1), PortId::new(2)).unwrap();
    let cold = harbor.sail(VesselId::new(2), PortId::new(2)).unwrap();
    assert!(cold < light);

    let distance = haversine_km(
        &harbor.port(PortId::new(1)).unwrap().location(),
        &harbor.port(PortId::new(2)).unwrap().location(),
    );
    assert!((light - cold - distance * (20_000.0 - 12_000.0)).abs() < 1e-3);
}
