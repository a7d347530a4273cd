// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance creation: window bounds and execution time as instance data.

use chrono::{DateTime, TimeZone, Utc};
use tempo_core::{
    format_instance_time, InstanceSpec, InstanceSpecData, InstanceState, JobSpec, Window,
    WindowError, CONFIG_KEY_DEND, CONFIG_KEY_DSTART, CONFIG_KEY_EXECUTION_TIME,
};

/// The env-kind data every instance carries: `EXECUTION_TIME`, `DSTART`
/// and `DEND`, in the instance time layout.
pub fn instance_data<Tz: TimeZone, Te: TimeZone>(
    window: &Window<Tz>,
    execution_time: &DateTime<Te>,
) -> Vec<InstanceSpecData> {
    vec![
        InstanceSpecData::env(CONFIG_KEY_EXECUTION_TIME, format_instance_time(execution_time)),
        InstanceSpecData::env(CONFIG_KEY_DSTART, format_instance_time(&window.start)),
        InstanceSpecData::env(CONFIG_KEY_DEND, format_instance_time(&window.end)),
    ]
}

/// Create a pending instance of `job` scheduled at `scheduled_at`.
///
/// The window is resolved in `scheduled_at`'s timezone. `execution_time`
/// is supplied by the caller so the result depends on no clock.
pub fn build_instance<Tz: TimeZone, Te: TimeZone>(
    job: &JobSpec,
    scheduled_at: &DateTime<Tz>,
    execution_time: &DateTime<Te>,
) -> Result<InstanceSpec, WindowError> {
    let window = job.task.window.window(scheduled_at)?;
    tracing::debug!(
        job = %job.name,
        policy = %job.task.window,
        %window,
        "resolved instance window"
    );

    Ok(InstanceSpec {
        job_name: job.name.clone(),
        scheduled_at: scheduled_at.with_timezone(&Utc),
        state: InstanceState::Pending,
        data: instance_data(&window, execution_time),
    })
}
