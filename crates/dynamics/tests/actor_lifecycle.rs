//! Actor identity and kinematic-target flow across a scene's lifetime.

use dynamics::{
    ActorId, BodyCore, BodyFlags, BoundsUpdateBatch, IdPool, MotionKind, Pose, RigidSim,
    ShapeCoreId,
};
use glam::Vec3;
use std::sync::Arc;

#[test]
fn scene_churn_neither_leaks_nor_duplicates_ids() {
    let pool = Arc::new(IdPool::new());

    // Three generations of actors created and destroyed in mixed order.
    let mut live: Vec<RigidSim> = Vec::new();
    for _ in 0..3 {
        for _ in 0..16 {
            live.push(RigidSim::new(Arc::clone(&pool), MotionKind::Dynamic).unwrap());
        }
        // Drop every other actor.
        let mut keep = Vec::new();
        for (i, sim) in live.drain(..).enumerate() {
            if i % 2 == 0 {
                keep.push(sim);
            }
        }
        live = keep;

        let mut seen: Vec<ActorId> = live.iter().map(RigidSim::actor_id).collect();
        seen.sort_unstable_by_key(|id| id.index());
        seen.dedup();
        assert_eq!(seen.len(), live.len(), "duplicate live actor id");
        assert_eq!(pool.live_count(), live.len());
    }

    drop(live);
    assert_eq!(pool.live_count(), 0);
}

#[test]
fn moving_a_multi_shape_actor_batches_every_bound() {
    let pool = Arc::new(IdPool::new());
    let mut dynamic = RigidSim::new(Arc::clone(&pool), MotionKind::Dynamic).unwrap();
    let mut fixture = RigidSim::new(Arc::clone(&pool), MotionKind::Static).unwrap();

    for i in 0..4 {
        dynamic.add_shape(ShapeCoreId(i));
    }
    fixture.add_shape(ShapeCoreId(100));

    let mut batch = BoundsUpdateBatch::new();
    dynamic.notify_shapes_of_transform_change(&mut batch);
    fixture.notify_shapes_of_transform_change(&mut batch);

    assert_eq!(batch.dynamic_updates.len(), 4);
    assert_eq!(batch.static_updates, vec![ShapeCoreId(100)]);

    // The next step starts from a drained batch.
    batch.clear();
    assert!(batch.dynamic_updates.is_empty());
}

#[test]
fn kinematic_target_is_consumed_once_per_step() {
    let mut body = BodyCore::new(Pose::IDENTITY);
    body.set_flags(BodyFlags::KINEMATIC);

    let target = Pose::from_translation(Vec3::new(0.0, 3.0, 0.0));
    body.set_kinematic_target(target, 0.4);

    // Step: cheap gate first, then the pose fetch, then consumption.
    assert!(body.has_valid_kinematic_target());
    let pose = body.kinematic_target().unwrap();
    assert_eq!(pose.translation, target.translation);
    body.invalidate_kinematic_target();

    // Next step sees no target until one is staged again.
    assert!(!body.has_valid_kinematic_target());
    assert_eq!(body.kinematic_target(), None);
}

#[test]
fn dynamic_bodies_ignore_staged_poses() {
    let mut body = BodyCore::new(Pose::IDENTITY);
    body.set_flags(BodyFlags::KINEMATIC);
    body.set_kinematic_target(Pose::from_translation(Vec3::X), 0.1);

    // Switching the body to force-driven hides the target from the
    // solver no matter what was staged.
    body.set_flags(BodyFlags::NONE);
    assert_eq!(body.kinematic_target(), None);
}
