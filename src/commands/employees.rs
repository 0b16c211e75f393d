use std::collections::HashSet;
use std::error::Error;

use chrono::{Local, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use sqlx::{Connection, PgConnection};

use crate::db::{self, NuevoUsuario};
use crate::file_utils::{estimate_data_rows, validate_file_exists};
use crate::models::{EmpleadoCsvRow, EMPLEADO_REQUIRED_HEADERS};
use crate::progress::ProgressTracker;
use crate::resolver::GrupoResolver;

/// Cada cuántas altas se confirma el batch abierto
const COMMIT_BATCH: usize = 50;

/// La columna "Alta" mezcla formato americano y europeo; se intenta en ese orden.
/// Devuelve `None` cuando la fecha no sale con ninguno de los dos.
pub fn parse_fecha_alta(alta: &str) -> Option<NaiveDateTime> {
    for formato in ["%m/%d/%Y", "%d/%m/%Y"] {
        if let Ok(fecha) = NaiveDate::parse_from_str(alta, formato) {
            return fecha.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Carga Users, UserRoles, Empleados y Sindicalizados desde el listado de
/// sindicalizados. Salta nóminas ya presentes y confirma cada 50 altas; una
/// corrida interrumpida pierde como mucho el batch abierto.
pub async fn populate_employees(
    conn: &mut PgConnection,
    input_file: &str,
) -> Result<usize, Box<dyn Error>> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Carga de Empleados Sindicalizados                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📄 Input: {}", input_file);

    validate_file_exists(input_file)?;
    let estimated = estimate_data_rows(input_file, 1)?;
    println!("📊 Estimación: ~{} registros", estimated);
    println!();

    // Prerequisitos: grupos ya cargados, área de producción y rol fijo
    let grupos = db::load_grupos(&mut *conn).await?;
    let resolver = GrupoResolver::from_rows(grupos);
    println!("📋 Grupos disponibles para matching: {}", resolver.len());
    if resolver.is_empty() {
        eprintln!("⚠️  No hay grupos cargados; todos los usuarios quedarán sin GrupoId");
    }

    let default_area_id = db::area_id_by_nombre(&mut *conn, db::AREA_PRODUCCION)
        .await?
        .ok_or_else(|| {
            format!(
                "Área '{}' no existe; correr primero el comando 'groups'",
                db::AREA_PRODUCCION
            )
        })?;

    let rol_id = db::rol_id_by_nombre(&mut *conn, db::ROL_EMPLEADO_SINDICALIZADO).await?;
    if rol_id.is_none() {
        eprintln!(
            "⚠️  WARNING: rol '{}' no encontrado; se omite la asignación de roles",
            db::ROL_EMPLEADO_SINDICALIZADO
        );
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(input_file)?;

    let headers = reader.headers()?.clone();
    for required in EMPLEADO_REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            return Err(format!(
                "Columna requerida '{}' no encontrada en {}",
                required, input_file
            )
            .into());
        }
    }

    let mut progress = ProgressTracker::new(COMMIT_BATCH as u64);
    let mut created = 0usize;
    let mut skipped = 0usize;
    let mut turnos: HashSet<String> = HashSet::new();
    let mut reglas: HashSet<String> = HashSet::new();

    let mut tx = conn.begin().await?;

    for result in reader.deserialize::<EmpleadoCsvRow>() {
        let row = result?.normalized();

        let fecha_de_ingreso =
            parse_fecha_alta(&row.alta).unwrap_or_else(|| Local::now().naive_local());
        let grupo_id = resolver.resolve(&row.unidad_organizativa);

        if db::user_id_by_nomina(&mut *tx, &row.nomina).await?.is_some() {
            println!("⏭️  Skipping existing user: {} - {}", row.nomina, row.nombre);
            skipped += 1;
            continue;
        }

        let user_id = db::insert_user(
            &mut *tx,
            &NuevoUsuario {
                numero_nomina: &row.nomina,
                nombre: &row.nombre,
                maquina: &row.posicion,
                fecha_de_ingreso,
                area_id: default_area_id,
                grupo_id,
            },
        )
        .await?;

        if let Some(rol_id) = rol_id {
            db::insert_user_role(&mut *tx, user_id, rol_id).await?;
        }

        db::insert_empleado(&mut *tx, user_id, &row).await?;
        db::insert_sindicalizado(&mut *tx, user_id, &row.nomina, &row.nombre).await?;

        turnos.insert(row.turno);
        reglas.insert(row.regla);

        created += 1;
        progress.update(created as u64);

        if created % COMMIT_BATCH == 0 {
            tx.commit().await?;
            tx = conn.begin().await?;
        }
    }

    tx.commit().await?;
    progress.finish();

    println!();
    println!("📊 RESUMEN:");
    println!("  Empleados creados:   {}", created);
    println!("  Nóminas ya cargadas: {}", skipped);
    println!("  Turnos distintos:    {}", turnos.len());
    println!("  Reglas distintas:    {}", reglas.len());
    println!();

    Ok(created)
}
