use super::SpatialContainment;
use geo::Point;
use rstar::{primitives::GeomWithData, RTree};
use synergy_core::model::BusinessRecord;

type IndexedCoordinate = GeomWithData<[f64; 2], usize>;

/// spatial index over a borrowed slice of business records. answers the same
/// question as a linear scan with a [`SpatialContainment`], but only tests
/// the records whose coordinates fall inside the containment envelope.
pub struct RecordIndex<'a> {
    records: &'a [BusinessRecord],
    rtree: RTree<IndexedCoordinate>,
}

impl<'a> RecordIndex<'a> {
    pub fn new(records: &'a [BusinessRecord]) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(idx, r)| GeomWithData::new(r.coordinate(), idx))
            .collect();
        Self {
            records,
            rtree: RTree::bulk_load(entries),
        }
    }

    /// finds the records within `radius_km` of the center according to the
    /// containment rule. results are returned in input order.
    pub fn nearby(
        &self,
        containment: &dyn SpatialContainment,
        center: &Point<f64>,
        radius_km: f64,
    ) -> Vec<&'a BusinessRecord> {
        let envelope = containment.envelope(center, radius_km);
        let mut indices = self
            .rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|idx| &self.records[idx])
            .filter(|r| containment.contains(center, radius_km, &r.point()))
            .collect()
    }
}
