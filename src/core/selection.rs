use crate::core::configuration::ConfigurationModel;
use crate::domain::model::{District, Plot};
use crate::domain::ports::DistrictCatalog;

/// Small duplicate-free set that keeps insertion order for display.
/// Membership is what matters; order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> SelectionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns `false` if the item was already selected.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the item if present, appends it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.remove(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ConfigurationModel {
    /// District ids are not checked against any catalog here; unknown ids
    /// simply never match when joined later.
    pub fn toggle_district(&mut self, district_id: &str) -> bool {
        let selected = self.selected_districts.toggle(district_id.to_string());
        tracing::debug!(
            "District '{}' {} ({} selected)",
            district_id,
            if selected { "selected" } else { "deselected" },
            self.selected_districts.len()
        );
        selected
    }

    pub fn selected_districts(&self) -> impl Iterator<Item = &str> {
        self.selected_districts.iter().map(String::as_str)
    }

    pub fn is_district_selected(&self, district_id: &str) -> bool {
        self.selected_districts.iter().any(|id| id == district_id)
    }

    /// Selected districts joined against reference data. Ids the catalog
    /// does not know are left out.
    pub fn selected_district_records<'a, C>(&self, catalog: &'a C) -> Vec<&'a District>
    where
        C: DistrictCatalog + ?Sized,
    {
        self.selected_districts
            .iter()
            .filter_map(|id| catalog.district(id))
            .collect()
    }

    /// Replaces the selected plot, last write wins. Whether the plot lies in
    /// a selected district is not checked; see [`Self::plot_in_selected_district`].
    pub fn select_plot(&mut self, plot: Plot) {
        tracing::debug!(
            "Plot '{}' selected ({} m², district '{}')",
            plot.id,
            plot.area,
            plot.district_id
        );
        self.selected_plot = Some(plot);
    }

    pub fn clear_plot(&mut self) -> Option<Plot> {
        let previous = self.selected_plot.take();
        if let Some(plot) = &previous {
            tracing::debug!("Plot '{}' deselected", plot.id);
        }
        previous
    }

    pub fn selected_plot(&self) -> Option<&Plot> {
        self.selected_plot.as_ref()
    }

    /// `true` when no plot is selected or its district is currently selected.
    pub fn plot_in_selected_district(&self) -> bool {
        self.selected_plot
            .as_ref()
            .map_or(true, |plot| self.is_district_selected(&plot.district_id))
    }

    pub fn enabled_amenities(&self) -> impl Iterator<Item = &str> {
        self.amenities()
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }
}
