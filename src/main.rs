use boitoan::api::router;
use boitoan::config::config;
use boitoan::db::init_db;
use boitoan::scheduler;
use boitoan::state::AppState;
use tokio::net::TcpListener;
use tokio_cron_scheduler::{Job, JobScheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let conf = config();
    tracing::info!(port = conf.port, "Starting boitoan service");

    let pool = init_db(&conf.db_path).await?;

    // Warm the cache on startup so the first requests of the day hit it.
    let startup_pool = pool.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::run_daily_refresh(startup_pool).await {
            tracing::error!(error = ?e, "Startup refresh failed");
        }
    });

    // 17:00 UTC is midnight in Vietnam (UTC+7).
    let sched_pool = pool.clone();
    let sched = JobScheduler::new().await?;
    sched
        .add(Job::new_async("0 0 17 * * *", move |_uuid, _l| {
            let p = sched_pool.clone();
            Box::pin(async move {
                if let Err(e) = scheduler::run_daily_refresh(p).await {
                    tracing::error!(error = ?e, "Scheduled refresh failed");
                }
            })
        })?)
        .await?;
    sched.start().await?;

    let state = AppState { pool };

    let app = router(state);
    let addr = format!("0.0.0.0:{}", conf.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server bound");

    axum::serve(listener, app).await?;

    Ok(())
}
