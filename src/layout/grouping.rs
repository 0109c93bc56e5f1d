// Primary-tag partition and cluster ordering.
//
// The cluster key is the FIRST tag of a contact; the rest of its tag list
// never affects clustering. Contacts without any tags go to a separate
// untagged list, placed by the grid fallback instead of an orbit.

use std::collections::HashMap;

use crate::contact::Contact;

/// One tag cluster: the ids of the contacts sharing a primary tag,
/// in input order.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub tag: String,
    pub members: Vec<String>,
}

/// Partition contacts into tag clusters plus the untagged remainder.
/// Clusters come back in first-encounter order of their tag.
pub fn group_by_primary_tag(contacts: &[Contact]) -> (Vec<Cluster>, Vec<String>) {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    let mut untagged: Vec<String> = Vec::new();

    for contact in contacts {
        match contact.primary_tag() {
            Some(tag) => {
                let idx = *index_of.entry(tag).or_insert_with(|| {
                    clusters.push(Cluster {
                        tag: tag.to_string(),
                        members: Vec::new(),
                    });
                    clusters.len() - 1
                });
                clusters[idx].members.push(contact.id.clone());
            }
            None => untagged.push(contact.id.clone()),
        }
    }

    (clusters, untagged)
}

/// Sort clusters by descending member count, so the largest cluster takes
/// the first sun slot. Equal-size clusters keep their first-encounter order
/// (stable sort), which fixes the ring assignment for ties.
pub fn order_clusters(mut clusters: Vec<Cluster>) -> Vec<Cluster> {
    clusters.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
    clusters
}
