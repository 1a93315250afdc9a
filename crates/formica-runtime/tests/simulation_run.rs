//! End-to-end runs through the simulation driver.

use formica_runtime::prelude::*;

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        width: 40,
        height: 40,
        torus: false,
        seed: Some(seed),
        colonies: vec![
            ColonyConfig { pheromone_id: 0, x: 10, y: 10, ants: 25, radius: 3.0 },
            ColonyConfig { pheromone_id: 1, x: 30, y: 30, ants: 15, radius: 1.5 },
            ColonyConfig { pheromone_id: 2, x: 10, y: 30, ants: 0, radius: 0.0 },
        ],
    }
}

#[test]
fn run_advances_all_ants_every_tick() {
    let mut sim = Simulation::from_config(config(5)).unwrap();
    let reports = sim.run(10);

    assert_eq!(sim.tick(), 10);
    assert!(reports.iter().all(|r| r.ants_stepped == 40 && r.colonies_stepped == 3));
    for colony in sim.colonies() {
        assert_eq!(colony.ants().steps(), 10);
    }
}

#[test]
fn same_seed_reproduces_the_whole_snapshot() {
    let snapshot_json = |seed| {
        let mut sim = Simulation::from_config(config(seed)).unwrap();
        sim.render();
        sim.run(4);
        serde_json::to_value(sim.snapshot()).unwrap()
    };

    let a = snapshot_json(77);
    assert_eq!(a, snapshot_json(77));

    // Colony and patch IDs are drawn from the world seed.
    let b = snapshot_json(78);
    assert_ne!(a["colonies"][0]["id"], b["colonies"][0]["id"]);
    assert_ne!(a["patches"][0]["id"], b["patches"][0]["id"]);
}

#[test]
fn render_then_export() {
    let mut sim = Simulation::from_config(config(1)).unwrap();
    // radius 3 -> 29 cells, radius 1.5 -> the 4 half-offset cells, radius 0 -> 1
    assert_eq!(sim.render(), 34);

    let svg = render_svg(sim.world());
    assert_eq!(svg.matches("<rect").count(), 35);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    save_snapshot(&sim, &path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["patches"].as_array().map(Vec::len), Some(34));
    assert_eq!(json["stats"]["colonies"], 3);
}
