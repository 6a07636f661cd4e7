use crate::core::calculator::{severity, timeline};
use crate::models::{Trip, TripListItem, TripSummary};
use crate::utils::time::{DateStyle, TimeFormatter};

pub struct Core;

impl Core {
    /// Shape one trip into the summary card + timeline model.
    ///
    /// Shared by the latest-trip screen (long date) and the history detail
    /// view (short date) so both apply the same rules.
    pub fn build_trip_summary(trip: &Trip, fmt: &TimeFormatter, style: DateStyle) -> TripSummary {
        let violations = timeline::out_of_order(&trip.events);
        if !violations.is_empty() {
            tracing::warn!(
                trip_id = trip.id,
                count = violations.len(),
                "Trip events are not in chronological order; showing server order"
            );
        }

        let counts = severity::aggregate_severities(&trip.events);

        TripSummary {
            trip_id: trip.id,
            date: fmt.date(&trip.start_time, style),
            start: fmt.time(&trip.start_time),
            end: fmt.time_opt(trip.end_time.as_deref()),
            duration: trip.duration.clone(),
            total_events: counts.total(),
            counts,
            timeline: timeline::build_timeline(&trip.events, fmt),
        }
    }

    /// History list rows, numbered from 1.
    pub fn build_trip_list(trips: &[Trip], fmt: &TimeFormatter) -> Vec<TripListItem> {
        trips
            .iter()
            .enumerate()
            .map(|(i, t)| TripListItem {
                position: i + 1,
                trip_id: t.id,
                date: fmt.date(&t.start_time, DateStyle::Short),
                span: format!(
                    "{} → {}",
                    fmt.time(&t.start_time),
                    fmt.time_opt(t.end_time.as_deref())
                ),
                duration: t.duration.clone(),
                badge: t.events_badge(),
            })
            .collect()
    }
}
