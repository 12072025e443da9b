//! Store operations (thread-safe: each takes the table lock once)

use crate::types::{
    CreateMoto, CreatePatio, CreateZona, Moto, MotoWithLocation, Patio, UpdateMoto, UpdatePatio,
    UpdateZona, Zona, ZonaWithPatio,
};

use super::{Tables, WriteError, YardDb};

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn page<T: Clone>(rows: &[T], offset: i64, limit: i64) -> (Vec<T>, i64) {
    let total = rows.len() as i64;
    let items = rows
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect();
    (items, total)
}

/// Zona joined with its pátio's name
fn zona_view(tables: &Tables, zona: &Zona) -> ZonaWithPatio {
    let patio_name = tables
        .patios
        .iter()
        .find(|p| p.id == zona.patio_id)
        .map(|p| p.name.clone())
        .unwrap_or_default();
    ZonaWithPatio {
        zona: zona.clone(),
        patio_name,
    }
}

/// Moto joined with its zona and pátio, when allocated
fn moto_view(tables: &Tables, moto: &Moto) -> MotoWithLocation {
    let zona = moto
        .zona_id
        .and_then(|id| tables.zonas.iter().find(|z| z.id == id));
    let patio = zona.and_then(|z| tables.patios.iter().find(|p| p.id == z.patio_id));
    MotoWithLocation {
        moto: moto.clone(),
        zona_name: zona.map(|z| z.name.clone()),
        patio_id: zona.map(|z| z.patio_id),
        patio_name: patio.map(|p| p.name.clone()),
    }
}

// ---- Pátios ----

pub(super) fn list_patios(db: &YardDb, offset: i64, limit: i64) -> (Vec<Patio>, i64) {
    let tables = db.tables.read();
    page(&tables.patios, offset, limit)
}

pub(super) fn find_patio(db: &YardDb, id: i64) -> Option<Patio> {
    let tables = db.tables.read();
    tables.patios.iter().find(|p| p.id == id).cloned()
}

pub(super) fn patio_exists(db: &YardDb, id: i64) -> bool {
    let tables = db.tables.read();
    tables.patios.iter().any(|p| p.id == id)
}

pub(super) fn insert_patio(db: &YardDb, new: CreatePatio) -> Patio {
    let mut tables = db.tables.write();
    tables.next_patio_id += 1;
    let now = now();
    let patio = Patio {
        id: tables.next_patio_id,
        name: new.name,
        city: new.city,
        state: new.state,
        created_at: now,
        updated_at: now,
    };
    tables.patios.push(patio.clone());
    patio
}

pub(super) fn update_patio(db: &YardDb, id: i64, update: UpdatePatio) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    let patio = tables
        .patios
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(WriteError::NotFound)?;
    patio.name = update.name;
    patio.city = update.city;
    patio.state = update.state;
    patio.updated_at = now();
    Ok(())
}

pub(super) fn delete_patio(db: &YardDb, id: i64) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    if !tables.patios.iter().any(|p| p.id == id) {
        return Err(WriteError::NotFound);
    }
    tables.patios.retain(|p| p.id != id);

    // Cascade: the pátio's zonas go away and their motos become unallocated
    let removed_zonas: Vec<i64> = tables
        .zonas
        .iter()
        .filter(|z| z.patio_id == id)
        .map(|z| z.id)
        .collect();
    tables.zonas.retain(|z| z.patio_id != id);
    for moto in tables.motos.iter_mut() {
        if moto.zona_id.is_some_and(|zid| removed_zonas.contains(&zid)) {
            moto.zona_id = None;
        }
    }
    Ok(())
}

// ---- Zonas ----

pub(super) fn list_zonas(db: &YardDb, offset: i64, limit: i64) -> (Vec<ZonaWithPatio>, i64) {
    let tables = db.tables.read();
    let total = tables.zonas.len() as i64;
    let items = tables
        .zonas
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .map(|z| zona_view(&tables, z))
        .collect();
    (items, total)
}

pub(super) fn find_zona(db: &YardDb, id: i64) -> Option<ZonaWithPatio> {
    let tables = db.tables.read();
    tables
        .zonas
        .iter()
        .find(|z| z.id == id)
        .map(|z| zona_view(&tables, z))
}

pub(super) fn zonas_by_patio(db: &YardDb, patio_id: i64) -> Option<Vec<ZonaWithPatio>> {
    let tables = db.tables.read();
    if !tables.patios.iter().any(|p| p.id == patio_id) {
        return None;
    }
    Some(
        tables
            .zonas
            .iter()
            .filter(|z| z.patio_id == patio_id)
            .map(|z| zona_view(&tables, z))
            .collect(),
    )
}

pub(super) fn insert_zona(db: &YardDb, new: CreateZona) -> Result<ZonaWithPatio, WriteError> {
    let mut tables = db.tables.write();
    let patio_name = tables
        .patios
        .iter()
        .find(|p| p.id == new.patio_id)
        .map(|p| p.name.clone())
        .ok_or(WriteError::DanglingReference)?;

    tables.next_zona_id += 1;
    let now = now();
    let zona = Zona {
        id: tables.next_zona_id,
        name: new.name,
        patio_id: new.patio_id,
        created_at: now,
        updated_at: now,
    };
    tables.zonas.push(zona.clone());
    Ok(ZonaWithPatio { zona, patio_name })
}

pub(super) fn update_zona(db: &YardDb, id: i64, update: UpdateZona) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    let zona = tables
        .zonas
        .iter_mut()
        .find(|z| z.id == id)
        .ok_or(WriteError::NotFound)?;
    zona.name = update.name;
    zona.updated_at = now();
    Ok(())
}

pub(super) fn delete_zona(db: &YardDb, id: i64) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    if !tables.zonas.iter().any(|z| z.id == id) {
        return Err(WriteError::NotFound);
    }
    tables.zonas.retain(|z| z.id != id);
    for moto in tables.motos.iter_mut() {
        if moto.zona_id == Some(id) {
            moto.zona_id = None;
        }
    }
    Ok(())
}

// ---- Motos ----

pub(super) fn list_motos(db: &YardDb, offset: i64, limit: i64) -> (Vec<MotoWithLocation>, i64) {
    let tables = db.tables.read();
    let total = tables.motos.len() as i64;
    let items = tables
        .motos
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .map(|m| moto_view(&tables, m))
        .collect();
    (items, total)
}

pub(super) fn find_moto(db: &YardDb, id: i64) -> Option<MotoWithLocation> {
    let tables = db.tables.read();
    tables
        .motos
        .iter()
        .find(|m| m.id == id)
        .map(|m| moto_view(&tables, m))
}

pub(super) fn motos_by_zona(db: &YardDb, zona_id: i64) -> Option<Vec<MotoWithLocation>> {
    let tables = db.tables.read();
    if !tables.zonas.iter().any(|z| z.id == zona_id) {
        return None;
    }
    Some(
        tables
            .motos
            .iter()
            .filter(|m| m.zona_id == Some(zona_id))
            .map(|m| moto_view(&tables, m))
            .collect(),
    )
}

pub(super) fn insert_moto(db: &YardDb, new: CreateMoto) -> Result<MotoWithLocation, WriteError> {
    let mut tables = db.tables.write();
    if let Some(zona_id) = new.zona_id {
        if !tables.zonas.iter().any(|z| z.id == zona_id) {
            return Err(WriteError::DanglingReference);
        }
    }

    tables.next_moto_id += 1;
    let now = now();
    let moto = Moto {
        id: tables.next_moto_id,
        plate: new.plate,
        model: new.model,
        status: new.status,
        zona_id: new.zona_id,
        created_at: now,
        updated_at: now,
    };
    tables.motos.push(moto.clone());
    Ok(moto_view(&tables, &moto))
}

pub(super) fn update_moto(db: &YardDb, id: i64, update: UpdateMoto) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    let index = tables
        .motos
        .iter()
        .position(|m| m.id == id)
        .ok_or(WriteError::NotFound)?;
    if let Some(zona_id) = update.zona_id {
        if !tables.zonas.iter().any(|z| z.id == zona_id) {
            return Err(WriteError::DanglingReference);
        }
    }

    let moto = &mut tables.motos[index];
    moto.plate = update.plate;
    moto.model = update.model;
    moto.status = update.status;
    moto.zona_id = update.zona_id;
    moto.updated_at = now();
    Ok(())
}

pub(super) fn delete_moto(db: &YardDb, id: i64) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    if !tables.motos.iter().any(|m| m.id == id) {
        return Err(WriteError::NotFound);
    }
    tables.motos.retain(|m| m.id != id);
    Ok(())
}

pub(super) fn move_moto(db: &YardDb, id: i64, new_zona_id: i64) -> Result<(), WriteError> {
    let mut tables = db.tables.write();
    let index = tables
        .motos
        .iter()
        .position(|m| m.id == id)
        .ok_or(WriteError::NotFound)?;
    if !tables.zonas.iter().any(|z| z.id == new_zona_id) {
        return Err(WriteError::DanglingReference);
    }

    let moto = &mut tables.motos[index];
    moto.zona_id = Some(new_zona_id);
    moto.updated_at = now();
    Ok(())
}
