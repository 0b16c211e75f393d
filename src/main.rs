use std::env;
use std::error::Error;

use sqlx::Connection;

// Importar módulos locales
mod commands;
mod db;
mod file_utils;
mod models;
mod progress;
mod resolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "populate" => {
            if args.len() != 4 {
                eprintln!("Usage: populate_tools populate <grupos.csv> <empleados.csv>");
                return Ok(());
            }
            let grupos_file = &args[2];
            let empleados_file = &args[3];

            let mut conn = db::connect().await?;
            println!("✅ Connected to database successfully!");
            println!();

            // Fase 1 → Fase 2: la carga de empleados depende de los grupos ya insertados
            commands::groups::populate_groups(&mut conn, grupos_file).await?;
            commands::employees::populate_employees(&mut conn, empleados_file).await?;

            conn.close().await?;
            println!("🎉 Database population complete!");
        },
        "groups" => {
            if args.len() != 3 {
                eprintln!("Usage: populate_tools groups <grupos.csv>");
                return Ok(());
            }
            let grupos_file = &args[2];

            let mut conn = db::connect().await?;
            println!("✅ Connected to database successfully!");
            println!();

            commands::groups::populate_groups(&mut conn, grupos_file).await?;
            conn.close().await?;
        },
        "employees" => {
            if args.len() != 3 {
                eprintln!("Usage: populate_tools employees <empleados.csv>");
                return Ok(());
            }
            let empleados_file = &args[2];

            let mut conn = db::connect().await?;
            println!("✅ Connected to database successfully!");
            println!();

            commands::employees::populate_employees(&mut conn, empleados_file).await?;
            conn.close().await?;
        },
        "help" => {
            help();
        },
        _ => {
            eprintln!("Unknown command: {}", command);
            help();
        }
    }

    Ok(())
}

fn help() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Populate Tools - Carga CSV → Vacaciones DB                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!(
        "Versión: {} (Build #{} - {})",
        env!("POPULATE_TOOLS_VERSION"),
        env!("BUILD_NUMBER"),
        env!("BUILD_DATE")
    );
    println!();
    println!("Commands:");
    println!("  populate <grupos.csv> <empleados.csv>");
    println!("    Corrida completa: Áreas/Grupos y después Empleados");
    println!();
    println!("  groups <grupos.csv>");
    println!("    Solo la carga de Áreas y Grupos");
    println!("    - Salta las dos filas de header del export");
    println!("    - Salta grupos ya presentes (por NombreGrupo)");
    println!();
    println!("  employees <empleados.csv>");
    println!("    Solo la carga de empleados sindicalizados");
    println!("    - Matchea la unidad organizativa contra los grupos cargados");
    println!("    - Salta nóminas ya presentes, commit cada 50 altas");
    println!();
    println!("EXAMPLES:");
    println!();
    println!("  # Corrida completa");
    println!("  populate_tools populate \"personas por grupo.csv\" \"Listado Octubre.csv\"");
    println!();
    println!("  # Re-correr solo empleados (idempotente por NumeroNomina)");
    println!("  populate_tools employees \"Listado Octubre.csv\"");
    println!();
    println!("NOTES:");
    println!("  - Conexión por DATABASE_URL o el default hard-codeado en db.rs");
    println!("  - El esquema (Areas, Grupos, Users, Roles, UserRoles,");
    println!("    Empleados, Sindicalizados) es externo: acá no se crea nada");
    println!("  - Fechas de alta: MM/DD/YYYY y DD/MM/YYYY; si no parsea se usa");
    println!("    el timestamp de la corrida");
}
