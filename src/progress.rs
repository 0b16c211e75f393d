use std::io::{self, Write};
use std::time::Instant;

/// Tracker de progreso para la carga por lotes de empleados
pub struct ProgressTracker {
    start_time: Instant,
    total_processed: u64,
    report_interval: u64,
}

impl ProgressTracker {
    pub fn new(report_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            total_processed: 0,
            report_interval,
        }
    }

    pub fn update(&mut self, processed: u64) {
        self.total_processed = processed;

        if self.total_processed % self.report_interval == 0 {
            self.report();
        }
    }

    fn report(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.total_processed as f64 / elapsed
        } else {
            0.0
        };

        print!(
            "\r📊 Procesados: {} | Rate: {:.0} reg/s | Tiempo: {:.1}s",
            self.total_processed, rate, elapsed
        );
        io::stdout().flush().ok();
    }

    /// Finaliza el progreso con el resumen de velocidad
    pub fn finish(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.total_processed as f64 / elapsed
        } else {
            0.0
        };

        println!(
            "\n✅ Completado: {} registros en {:.1}s ({:.0} reg/s)",
            self.total_processed, elapsed, rate
        );
    }
}
