use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            provider_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            duration_minutes INTEGER NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create work_schedules table (weekday: 0 = Monday ... 6 = Sunday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS work_schedules (
            id BIGSERIAL PRIMARY KEY,
            provider_id UUID NOT NULL,
            weekday SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_weekday CHECK (weekday BETWEEN 0 AND 6)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_exceptions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_exceptions (
            id BIGSERIAL PRIMARY KEY,
            provider_id UUID NOT NULL,
            date DATE NOT NULL,
            kind VARCHAR(32) NOT NULL,
            start_time TIME NULL,
            end_time TIME NULL,
            reason TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_exception_kind CHECK (kind IN ('closed', 'special_hours')),
            CONSTRAINT special_hours_have_times CHECK (
                kind <> 'special_hours' OR (start_time IS NOT NULL AND end_time IS NOT NULL)
            ),
            CONSTRAINT one_exception_per_day UNIQUE (provider_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            service_id UUID NOT NULL REFERENCES services(id),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_booking_range CHECK (end_time > start_time),
            CONSTRAINT valid_booking_status CHECK (status IN ('pending', 'confirmed', 'cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_services_provider_id ON services(provider_id)",
        "CREATE INDEX IF NOT EXISTS idx_work_schedules_provider_id ON work_schedules(provider_id)",
        "CREATE INDEX IF NOT EXISTS idx_schedule_exceptions_provider_date ON schedule_exceptions(provider_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_service_date ON bookings(service_id, date)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
