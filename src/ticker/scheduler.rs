//! The live recomputation loop.
//!
//! A [`TickScheduler`] recomputes accrual once per interval and publishes
//! each result to its sink. Every running loop is owned by exactly one
//! [`TickHandle`]; stopping, replacing or dropping the handle cancels it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::config::TickerConfig;
use crate::models::SalaryParameters;

use super::clock::Clock;
use super::sink::{EarningsSink, TickUpdate};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared between a handle and its loop.
///
/// For each publish the loop takes the sink lock, then this lock, and holds
/// both until the publish is done. Once a canceller has set `cancelled`
/// under this lock no further publish can start.
#[derive(Debug)]
struct TimerGate {
    cancelled: bool,
    next_deadline: Instant,
}

/// A running loop.
#[derive(Debug)]
struct ActiveTimer {
    id: Uuid,
    params: SalaryParameters,
    gate: Arc<Mutex<TimerGate>>,
    task: JoinHandle<()>,
}

impl ActiveTimer {
    /// Cancels the loop and returns the deadline its next tick would have
    /// fired at.
    fn cancel(&self) -> Instant {
        let next_deadline = {
            let mut gate = lock(&self.gate);
            gate.cancelled = true;
            gate.next_deadline
        };
        self.task.abort();
        next_deadline
    }
}

impl Drop for ActiveTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Ownership of one recurring tick loop.
///
/// An inactive handle owns nothing. Dropping an active handle stops its
/// loop.
#[derive(Debug, Default)]
pub struct TickHandle {
    timer: Option<ActiveTimer>,
}

impl TickHandle {
    /// Returns a handle that owns no loop.
    pub fn inactive() -> Self {
        Self { timer: None }
    }

    /// Returns true while the handle owns a running loop.
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns the correlation ID of the running loop, if any.
    pub fn timer_id(&self) -> Option<Uuid> {
        self.timer.as_ref().map(|timer| timer.id)
    }

    /// Returns the parameters the running loop computes with, if any.
    pub fn params(&self) -> Option<&SalaryParameters> {
        self.timer.as_ref().map(|timer| &timer.params)
    }
}

/// Drives [`compute`] on a fixed interval and publishes to a sink.
///
/// # Example
///
/// ```
/// use earnings_ticker::config::TickerConfig;
/// use earnings_ticker::models::{PayFrequency, SalaryParameters};
/// use earnings_ticker::ticker::{SystemClock, TickScheduler, TickUpdate};
/// use rust_decimal::Decimal;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let scheduler = TickScheduler::new(
///     SystemClock::new(),
///     |update: &TickUpdate| println!("{} {}", update.clock, update.result.earned_today),
///     &TickerConfig::default(),
/// );
///
/// let params = SalaryParameters::new(Decimal::new(72000, 0), PayFrequency::Yearly, false).unwrap();
/// let mut handle = scheduler.start(params);
/// assert!(handle.is_active());
///
/// scheduler.stop(&mut handle);
/// assert!(!handle.is_active());
/// # }
/// ```
#[derive(Debug)]
pub struct TickScheduler<C, S> {
    clock: Arc<C>,
    sink: Arc<Mutex<S>>,
    interval: Duration,
}

impl<C: Clock, S: EarningsSink> TickScheduler<C, S> {
    /// Creates a scheduler publishing to `sink` every `config.interval()`.
    pub fn new(clock: C, sink: S, config: &TickerConfig) -> Self {
        Self {
            clock: Arc::new(clock),
            sink: Arc::new(Mutex::new(sink)),
            interval: config.interval(),
        }
    }

    /// Returns the tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs `f` with exclusive access to the sink.
    ///
    /// Blocks while a tick is being published. `f` may [`stop`](Self::stop)
    /// or [`replace`](Self::replace) a running handle, but must not
    /// [`start`](Self::start) one: starting publishes through the sink lock
    /// `f` already holds.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut lock(&self.sink))
    }

    /// Starts publishing ticks for `params`.
    ///
    /// Publishes one tick immediately, then one per interval. Parameters
    /// with an out-of-range amount schedule nothing and yield an inactive
    /// handle.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(&self, params: SalaryParameters) -> TickHandle {
        if !params.is_valid() {
            warn!(amount = %params.amount, "Not starting ticker: amount out of range");
            return TickHandle::inactive();
        }

        let now = Instant::now();
        let timer_id = Uuid::new_v4();
        publish_tick(&*self.clock, &mut *lock(&self.sink), &params, timer_id);

        let timer = self.spawn_timer(timer_id, params, now + self.interval);
        info!(
            timer_id = %timer.id,
            amount = %timer.params.amount,
            frequency = %timer.params.frequency,
            count_weekends = timer.params.count_weekends,
            interval_ms = self.interval.as_millis() as u64,
            "Ticker started"
        );

        TickHandle { timer: Some(timer) }
    }

    /// Stops the handle's loop. Does nothing on an inactive handle.
    ///
    /// No tick is published after this returns.
    pub fn stop(&self, handle: &mut TickHandle) {
        if let Some(timer) = handle.timer.take() {
            timer.cancel();
            info!(timer_id = %timer.id, "Ticker stopped");
        }
    }

    /// Swaps the parameters of a running loop.
    ///
    /// The replacement keeps the old loop's cadence: the next scheduled tick
    /// is the first to use `params`, with no extra immediate tick. On an
    /// inactive handle this behaves like [`start`](Self::start). Invalid
    /// parameters stop the handle and leave it inactive.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn replace(&self, handle: &mut TickHandle, params: SalaryParameters) {
        let Some(previous) = handle.timer.take() else {
            *handle = self.start(params);
            return;
        };

        let next_deadline = previous.cancel();

        if !params.is_valid() {
            warn!(
                timer_id = %previous.id,
                amount = %params.amount,
                "Ticker stopped: replacement amount out of range"
            );
            return;
        }

        let timer = self.spawn_timer(Uuid::new_v4(), params, next_deadline);
        info!(
            previous_timer_id = %previous.id,
            timer_id = %timer.id,
            amount = %timer.params.amount,
            frequency = %timer.params.frequency,
            count_weekends = timer.params.count_weekends,
            "Ticker parameters replaced"
        );
        handle.timer = Some(timer);
    }

    fn spawn_timer(
        &self,
        id: Uuid,
        params: SalaryParameters,
        first_deadline: Instant,
    ) -> ActiveTimer {
        let gate = Arc::new(Mutex::new(TimerGate {
            cancelled: false,
            next_deadline: first_deadline,
        }));

        let task = tokio::spawn(run_timer(
            Arc::clone(&self.clock),
            Arc::clone(&self.sink),
            Arc::clone(&gate),
            params.clone(),
            self.interval,
            id,
        ));

        ActiveTimer {
            id,
            params,
            gate,
            task,
        }
    }
}

async fn run_timer<C: Clock, S: EarningsSink>(
    clock: Arc<C>,
    sink: Arc<Mutex<S>>,
    gate: Arc<Mutex<TimerGate>>,
    params: SalaryParameters,
    interval: Duration,
    timer_id: Uuid,
) {
    loop {
        let deadline = lock(&gate).next_deadline;
        sleep_until(deadline).await;

        let mut target = lock(&sink);
        let mut state = lock(&gate);
        if state.cancelled {
            break;
        }

        publish_tick(&*clock, &mut *target, &params, timer_id);

        // A late tick pushes the schedule back rather than bursting.
        let now = Instant::now();
        state.next_deadline = if deadline + interval > now {
            deadline + interval
        } else {
            now + interval
        };
    }
}

fn publish_tick<C: Clock, S: EarningsSink>(
    clock: &C,
    sink: &mut S,
    params: &SalaryParameters,
    timer_id: Uuid,
) {
    let result = compute(clock.now(), params);
    debug!(
        timer_id = %timer_id,
        earned_today = %result.earned_today,
        earned_this_month = %result.earned_this_month,
        earned_this_year = %result.earned_this_year,
        "Tick"
    );

    let update = TickUpdate::new(result, Instant::now().into_std());
    sink.publish(&update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayFrequency;
    use crate::ticker::ManualClock;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tokio::time::sleep;

    type Recorded = Arc<Mutex<Vec<TickUpdate>>>;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn noon() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-01-14 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn yearly(amount: &str) -> SalaryParameters {
        SalaryParameters::new(dec(amount), PayFrequency::Yearly, true).unwrap()
    }

    fn recording_scheduler(
        clock: ManualClock,
    ) -> (
        TickScheduler<ManualClock, impl EarningsSink>,
        Recorded,
    ) {
        let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
        let sink_log = Arc::clone(&recorded);
        let scheduler = TickScheduler::new(
            clock,
            move |update: &TickUpdate| sink_log.lock().unwrap().push(update.clone()),
            &TickerConfig::default(),
        );
        (scheduler, recorded)
    }

    fn today_amounts(recorded: &Recorded) -> Vec<Decimal> {
        recorded
            .lock()
            .unwrap()
            .iter()
            .map(|update| update.result.earned_today)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_publishes_immediately() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let handle = scheduler.start(yearly("260000"));

        assert!(handle.is_active());
        assert_eq!(today_amounts(&recorded), vec![dec("500")]);
        assert_eq!(recorded.lock().unwrap()[0].clock, "12:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let _handle = scheduler.start(yearly("260000"));
        sleep(Duration::from_millis(3500)).await;

        assert_eq!(recorded.lock().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_tick_reads_the_clock() {
        let clock = ManualClock::new(noon());
        let (scheduler, recorded) = recording_scheduler(clock.clone());

        let _handle = scheduler.start(yearly("260000"));
        // Six hours later on the wall clock: three quarters of the day
        clock.advance(chrono::Duration::hours(6));
        sleep(Duration::from_millis(1500)).await;

        assert_eq!(today_amounts(&recorded), vec![dec("500"), dec("750")]);
        assert_eq!(recorded.lock().unwrap()[1].clock, "18:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_amount_does_not_start() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));
        let params = SalaryParameters {
            amount: Decimal::ZERO,
            frequency: PayFrequency::Monthly,
            count_weekends: false,
        };

        let handle = scheduler.start(params);
        sleep(Duration::from_millis(3000)).await;

        assert!(!handle.is_active());
        assert!(handle.timer_id().is_none());
        assert!(recorded.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_the_sink() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        sleep(Duration::from_millis(1500)).await;
        scheduler.stop(&mut handle);
        let published = recorded.lock().unwrap().len();

        sleep(Duration::from_secs(10)).await;

        assert_eq!(published, 2);
        assert_eq!(recorded.lock().unwrap().len(), published);
        assert!(!handle.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        scheduler.stop(&mut handle);
        scheduler.stop(&mut handle);
        sleep(Duration::from_secs(3)).await;

        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_ticks() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let handle = scheduler.start(yearly("260000"));
        drop(handle);
        sleep(Duration::from_secs(3)).await;

        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_applies_on_next_tick_without_gap_or_double_fire() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        sleep(Duration::from_millis(1500)).await;
        let first_id = handle.timer_id();

        scheduler.replace(&mut handle, yearly("520000"));
        // Replacing publishes nothing by itself
        assert_eq!(recorded.lock().unwrap().len(), 2);

        sleep(Duration::from_millis(1000)).await;

        assert_eq!(
            today_amounts(&recorded),
            vec![dec("500"), dec("500"), dec("1000")]
        );
        assert!(handle.is_active());
        assert_ne!(handle.timer_id(), first_id);
        assert_eq!(handle.params().map(|p| p.amount), Some(dec("520000")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_keeps_one_second_cadence() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        sleep(Duration::from_millis(400)).await;
        scheduler.replace(&mut handle, yearly("520000"));
        sleep(Duration::from_millis(500)).await;
        // 900 ms after start: still only the immediate tick
        assert_eq!(recorded.lock().unwrap().len(), 1);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(today_amounts(&recorded), vec![dec("500"), dec("1000")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_replace_never_runs_two_loops() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        for amount in ["260001", "260002", "260003", "260004"] {
            scheduler.replace(&mut handle, yearly(amount));
        }
        sleep(Duration::from_millis(3500)).await;

        // Immediate tick plus exactly one per elapsed second
        assert_eq!(recorded.lock().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_on_inactive_handle_starts() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = TickHandle::inactive();
        scheduler.replace(&mut handle, yearly("260000"));

        assert!(handle.is_active());
        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_with_invalid_amount_stops() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));

        let mut handle = scheduler.start(yearly("260000"));
        let invalid = SalaryParameters {
            amount: dec("-5"),
            ..yearly("1")
        };
        scheduler.replace(&mut handle, invalid);
        sleep(Duration::from_secs(3)).await;

        assert!(!handle.is_active());
        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_amount_is_declined_like_zero() {
        let (scheduler, recorded) = recording_scheduler(ManualClock::new(noon()));
        let oversized = SalaryParameters {
            amount: Decimal::from_scientific("1e27").unwrap(),
            frequency: PayFrequency::Hourly,
            count_weekends: true,
        };

        let mut handle = scheduler.start(oversized.clone());
        assert!(!handle.is_active());
        assert!(recorded.lock().unwrap().is_empty());

        handle = scheduler.start(yearly("260000"));
        scheduler.replace(&mut handle, oversized);
        sleep(Duration::from_secs(3)).await;

        assert!(!handle.is_active());
        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_from_inside_with_sink_does_not_deadlock() {
        let scheduler = Arc::new(TickScheduler::new(
            ManualClock::new(noon()),
            ClockLog::default(),
            &TickerConfig { interval_ms: 1 },
        ));

        let worker = Arc::clone(&scheduler);
        let stopping = tokio::task::spawn_blocking(move || {
            for _ in 0..200 {
                let mut handle = worker.start(yearly("260000"));
                std::thread::sleep(Duration::from_millis(2));
                worker.with_sink(|_| worker.stop(&mut handle));
                assert!(!handle.is_active());
            }
        });

        tokio::time::timeout(Duration::from_secs(30), stopping)
            .await
            .expect("stopping from inside with_sink deadlocked")
            .unwrap();

        // Nothing publishes once every handle is stopped
        let published = scheduler.with_sink(|log| log.0.len());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(scheduler.with_sink(|log| log.0.len()), published);
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_sink_gives_access_to_published_state() {
        let scheduler = TickScheduler::new(
            ManualClock::new(noon()),
            ClockLog::default(),
            &TickerConfig { interval_ms: 250 },
        );

        let _handle = scheduler.start(yearly("260000"));
        sleep(Duration::from_millis(600)).await;

        assert_eq!(scheduler.interval(), Duration::from_millis(250));
        assert_eq!(scheduler.with_sink(|log| log.0.len()), 3);
    }

    #[derive(Default)]
    struct ClockLog(Vec<String>);

    impl EarningsSink for ClockLog {
        fn publish(&mut self, update: &TickUpdate) {
            self.0.push(update.clock.clone());
        }
    }
}
