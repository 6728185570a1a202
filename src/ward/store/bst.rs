use super::DataStore;
use crate::error::{Result, WardError};
use crate::model::{Patient, PatientId, PatientUpdate};
use log::debug;
use std::cmp::Ordering;
use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    patient: Patient,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(patient: Patient) -> Box<Self> {
        Box::new(Self {
            patient,
            left: None,
            right: None,
        })
    }
}

/// Patients ordered by id in an unbalanced binary search tree.
///
/// Every node exclusively owns its children. For each node, ids in the left
/// subtree are smaller and ids in the right subtree are larger; duplicates are
/// never stored.
///
/// Sorted input degrades the tree into a list as deep as it is long, so no
/// operation here (drop included) recurses on the tree's shape.
#[derive(Default)]
pub struct PatientTree {
    root: Link,
    len: usize,
}

impl PatientTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-order iterator over all patients (ascending id).
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    fn insert_at(mut slot: &mut Link, patient: Patient) -> Result<()> {
        while let Some(node) = slot {
            slot = match patient.id.cmp(&node.patient.id) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(WardError::DuplicateKey(patient.id)),
            };
        }
        *slot = Some(Node::leaf(patient));
        Ok(())
    }

    fn find_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match id.cmp(&node.patient.id) {
                Ordering::Equal => return Some(&mut node.patient),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Leftmost record of a non-empty subtree.
    fn find_min(node: &Node) -> &Patient {
        let mut node = node;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.patient
    }

    /// Removes `id` from the subtree rooted at `slot`, returning its record.
    ///
    /// A node with two children takes over a copy of its in-order successor,
    /// which is then removed from the right subtree. The successor has no left
    /// child, so that second removal never reaches the two-children case.
    fn remove_at(mut slot: &mut Link, id: PatientId) -> Option<Patient> {
        loop {
            let ordering = id.cmp(&slot.as_deref()?.patient.id);
            slot = match ordering {
                Ordering::Equal => break,
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Greater => &mut slot.as_mut()?.right,
            };
        }

        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.patient),
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                Some(node.patient)
            }
            (Some(left), Some(right)) => {
                let successor = Self::find_min(&right).clone();
                let successor_id = successor.id;
                let removed = std::mem::replace(&mut node.patient, successor);
                node.left = Some(left);
                node.right = Some(right);
                Self::remove_at(&mut node.right, successor_id);
                *slot = Some(node);
                Some(removed)
            }
        }
    }
}

/// Frees nodes one at a time; the default drop glue would recurse once per
/// level.
impl Drop for PatientTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Copies node by node into the matching empty slots, keeping the shape.
impl Clone for PatientTree {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        {
            let mut pending: Vec<(&Node, &mut Link)> = Vec::new();
            if let Some(root) = self.root.as_deref() {
                pending.push((root, &mut copy.root));
            }
            while let Some((node, slot)) = pending.pop() {
                let Node { left, right, .. } =
                    &mut **slot.insert(Node::leaf(node.patient.clone()));
                if let Some(child) = node.left.as_deref() {
                    pending.push((child, left));
                }
                if let Some(child) = node.right.as_deref() {
                    pending.push((child, right));
                }
            }
        }
        copy.len = self.len;
        copy
    }
}

impl fmt::Debug for PatientTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatientTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("patients", &self.list())
            .finish()
    }
}

impl DataStore for PatientTree {
    fn insert(&mut self, patient: Patient) -> Result<()> {
        let id = patient.id;
        Self::insert_at(&mut self.root, patient)?;
        self.len += 1;
        debug!("inserted patient {} (size {})", id, self.len);
        Ok(())
    }

    fn get(&self, id: PatientId) -> Option<&Patient> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match id.cmp(&node.patient.id) {
                Ordering::Equal => return Some(&node.patient),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    fn find_matching(&self, matcher: &dyn Fn(&Patient) -> bool) -> Vec<&Patient> {
        self.iter().filter(|&p| matcher(p)).collect()
    }

    fn update(&mut self, id: PatientId, update: &PatientUpdate) -> Result<&Patient> {
        let patient = self.find_mut(id).ok_or(WardError::NotFound(id))?;
        update.apply_to(patient);
        debug!("updated patient {}", id);
        Ok(patient)
    }

    fn delete(&mut self, id: PatientId) -> Result<Patient> {
        if !self.contains(id) {
            return Err(WardError::NotFound(id));
        }
        let removed = Self::remove_at(&mut self.root, id).ok_or(WardError::NotFound(id))?;
        self.len -= 1;
        debug!("deleted patient {} (size {})", id, self.len);
        Ok(removed)
    }

    fn list(&self) -> Vec<&Patient> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<'a> IntoIterator for &'a PatientTree {
    type Item = &'a Patient;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal with an explicit stack of pending ancestors.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Patient;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.patient)
    }
}
