//! Containers shuttled between vessels and port storage

use crate::common::*;
use seaway::{ContainerId, Error, Harbor, PortId, SizeClass, VesselId};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

/// Every container id appears exactly once across all storage and holds.
fn assert_conserved(harbor: &Harbor, expected: usize) {
    let mut seen = HashSet::new();
    for port in harbor.port_ids() {
        for c in harbor.port(port).unwrap().storage() {
            assert!(seen.insert(c.id()), "{} duplicated", c.id());
        }
    }
    for vessel in harbor.vessel_ids() {
        for c in harbor.vessel(vessel).unwrap().cargo() {
            assert!(seen.insert(c.id()), "{} duplicated", c.id());
        }
    }
    assert_eq!(seen.len(), expected);
}

#[test]
fn test_shuttle_between_vessels_conserves_containers() {
    let harbor = Arc::new(coastal_harbor());
    harbor
        .commission(SizeClass::Heavy, VesselId::new(1), PortId::new(1), 0.0)
        .unwrap();
    harbor
        .commission(SizeClass::Heavy, VesselId::new(2), PortId::new(1), 0.0)
        .unwrap();
    for id in 0..4 {
        harbor.load(VesselId::new(1), basic(id, 500)).unwrap();
    }

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = [1u64, 2]
        .into_iter()
        .map(|me| {
            let harbor = Arc::clone(&harbor);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for round in 0..500u64 {
                    let container = ContainerId::new(round % 4);
                    // Drop a container on the quay, or pick one up.
                    match harbor.unload_here(VesselId::new(me), container) {
                        Ok(()) | Err(Error::ContainerNotFound { .. }) => {}
                        Err(e) => panic!("unload: {e}"),
                    }
                    match harbor.load_from_port(VesselId::new(me), container) {
                        Ok(())
                        | Err(Error::NotInStorage { .. })
                        | Err(Error::CapacityExceeded(_)) => {}
                        Err(e) => panic!("load: {e}"),
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_conserved(&harbor, 4);
}

#[test]
fn test_unload_during_voyages_conserves_containers() {
    let harbor = Arc::new(coastal_harbor());
    harbor
        .commission(SizeClass::Heavy, VesselId::new(1), PortId::new(1), 1.0e12)
        .unwrap();
    for id in 0..5 {
        harbor.load(VesselId::new(1), basic(id, 1000)).unwrap();
    }

    let sailor = {
        let harbor = Arc::clone(&harbor);
        thread::spawn(move || {
            for leg in 0..50u64 {
                let to = PortId::new(1 + (leg + 1) % 2);
                harbor.sail(VesselId::new(1), to).unwrap();
            }
        })
    };
    let unloader = {
        let harbor = Arc::clone(&harbor);
        thread::spawn(move || {
            for id in 0..5u64 {
                harbor
                    .unload_here(VesselId::new(1), ContainerId::new(id))
                    .unwrap();
            }
        })
    };
    sailor.join().unwrap();
    unloader.join().unwrap();

    assert!(harbor
        .with_vessel(VesselId::new(1), |v| v.cargo().is_empty())
        .unwrap());
    assert_conserved(&harbor, 5);
}
