//! Demo yard layout loaded at startup

use crate::types::{Moto, Patio, Zona};

use super::YardDb;

/// Populate the store with the demo records if it is empty.
///
/// Two pátios, three zonas, three motos; ids are assigned densely from 1 so
/// the layout is predictable for smoke tests and local exploration.
pub(super) fn initialize(db: &YardDb) {
    let mut tables = db.tables.write();
    if !tables.patios.is_empty() {
        return;
    }
    let now = chrono::Utc::now().timestamp();

    let patios = [
        ("CD São Paulo", "São Paulo", "SP"),
        ("CD Rio de Janeiro", "Rio de Janeiro", "RJ"),
    ];
    for (index, (name, city, state)) in patios.iter().enumerate() {
        tables.patios.push(Patio {
            id: index as i64 + 1,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            created_at: now,
            updated_at: now,
        });
    }
    tables.next_patio_id = tables.patios.len() as i64;

    let zonas = [("A1", 1), ("A2", 1), ("B1", 2)];
    for (index, (name, patio_id)) in zonas.iter().enumerate() {
        tables.zonas.push(Zona {
            id: index as i64 + 1,
            name: name.to_string(),
            patio_id: *patio_id,
            created_at: now,
            updated_at: now,
        });
    }
    tables.next_zona_id = tables.zonas.len() as i64;

    let motos = [
        ("ABC1D23", "CG 160", "Ativa", 1),
        ("XYZ4E56", "NMax 160", "Manutenção", 2),
        ("JKL7M89", "Fazer 250", "Ativa", 3),
    ];
    for (index, (plate, model, status, zona_id)) in motos.iter().enumerate() {
        tables.motos.push(Moto {
            id: index as i64 + 1,
            plate: plate.to_string(),
            model: model.to_string(),
            status: status.to_string(),
            zona_id: Some(*zona_id),
            created_at: now,
            updated_at: now,
        });
    }
    tables.next_moto_id = tables.motos.len() as i64;
}
