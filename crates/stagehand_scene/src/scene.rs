use glam::{Affine3A, Vec3};
use slotmap::SlotMap;

use crate::ActorHandle;
use crate::actor::Actor;

/// Actor arena plus the list of top-level actors.
///
/// Handles stay valid until the actor is removed; every accessor silently
/// returns `None` for stale handles, so the timeline never panics on them.
#[derive(Debug, Default)]
pub struct Scene {
    pub actors: SlotMap<ActorHandle, Actor>,
    pub root_actors: Vec<ActorHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an actor without placing it in the hierarchy.
    pub fn insert(&mut self, actor: Actor) -> ActorHandle {
        self.actors.insert(actor)
    }

    /// Inserts an actor as a top-level actor.
    pub fn add_actor(&mut self, actor: Actor) -> ActorHandle {
        let handle = self.actors.insert(actor);
        self.root_actors.push(handle);
        handle
    }

    /// Makes `child` a child of `parent`, detaching it from its previous
    /// parent or from the root list.
    pub fn attach(&mut self, child: ActorHandle, parent: ActorHandle) {
        if child == parent {
            log::warn!("Cannot attach actor to itself!");
            return;
        }
        if !self.actors.contains_key(parent) {
            log::error!("Parent actor not found during attach!");
            return;
        }
        let Some(old_parent) = self.actors.get(child).map(|a| a.parent) else {
            return;
        };

        match old_parent {
            Some(p) => {
                if let Some(p) = self.actors.get_mut(p) {
                    p.children.retain(|&c| c != child);
                }
            }
            None => self.root_actors.retain(|&r| r != child),
        }

        if let Some(c) = self.actors.get_mut(child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.actors.get_mut(parent) {
            p.children.push(child);
        }
    }

    /// Removes an actor and its whole subtree.
    pub fn remove(&mut self, handle: ActorHandle) {
        let Some(children) = self.actors.get(handle).map(|a| a.children.clone()) else {
            return;
        };
        for child in children {
            self.remove(child);
        }

        match self.actors.get(handle).and_then(|a| a.parent) {
            Some(parent) => {
                if let Some(p) = self.actors.get_mut(parent) {
                    p.children.retain(|&c| c != handle);
                }
            }
            None => self.root_actors.retain(|&r| r != handle),
        }

        self.actors.remove(handle);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: ActorHandle) -> Option<&Actor> {
        self.actors.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        self.actors.get_mut(handle)
    }

    #[must_use]
    pub fn name_of(&self, handle: ActorHandle) -> Option<&str> {
        self.actors.get(handle).map(|a| a.name.as_str())
    }

    /// Depth-first search for the first actor called `name`, starting from
    /// each of `roots` in order and descending into their children.
    #[must_use]
    pub fn find_by_name(&self, roots: &[ActorHandle], name: &str) -> Option<ActorHandle> {
        roots
            .iter()
            .find_map(|&root| self.find_in_subtree(root, name))
    }

    fn find_in_subtree(&self, current: ActorHandle, name: &str) -> Option<ActorHandle> {
        let actor = self.actors.get(current)?;
        if actor.name == name {
            return Some(current);
        }
        actor
            .children
            .iter()
            .find_map(|&child| self.find_in_subtree(child, name))
    }

    /// World matrix obtained by composing local transforms up the parent chain.
    #[must_use]
    pub fn world_matrix(&self, handle: ActorHandle) -> Option<Affine3A> {
        let actor = self.actors.get(handle)?;
        let local = actor.transform.local_matrix();
        Some(match actor.parent.and_then(|p| self.world_matrix(p)) {
            Some(parent) => parent * local,
            None => local,
        })
    }

    /// Applies a move-and-look-at step to `handle`.
    ///
    /// Sets the local position, then, if the actor's controller names a
    /// look-at target that exists in the scene, rotates the actor toward the
    /// target's world position. Returns `false` when the actor is missing or
    /// has no controller.
    pub fn move_and_look_at(&mut self, handle: ActorHandle, local_position: Vec3) -> bool {
        let Some(actor) = self.actors.get(handle) else {
            return false;
        };
        let Some(controller) = actor.move_and_look_at.as_ref() else {
            return false;
        };

        // Target position expressed in the actor's parent space.
        let target = controller
            .look_at_target
            .as_deref()
            .and_then(|name| self.find_by_name(&self.root_actors, name))
            .filter(|&target| target != handle)
            .and_then(|target| self.world_matrix(target))
            .map(|world| {
                let parent_inverse = actor
                    .parent
                    .and_then(|p| self.world_matrix(p))
                    .map_or(Affine3A::IDENTITY, |m| m.inverse());
                parent_inverse.transform_point3(world.translation.into())
            });

        let Some(actor) = self.actors.get_mut(handle) else {
            return false;
        };
        actor.transform.position = local_position;
        if let Some(controller) = actor.move_and_look_at.as_mut() {
            controller.local_position = local_position;
        }
        if let Some(target) = target {
            actor.transform.look_at(target, Vec3::Y);
        }
        true
    }
}
