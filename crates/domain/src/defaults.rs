//! Built-in default configuration and sample application records.
//!
//! This is the document every deployment starts from and the fallback for
//! absent sections of a stored document. Field ids double as the data keys
//! of submitted records, so they keep the product's original spelling.

use std::collections::BTreeMap;

use serde_json::json;

use crate::field::{FieldControl, FormField, FormFieldInput, GridCols};
use crate::record::FormRecord;
use crate::reference::{ClientConfig, LocationConfig};
use crate::schema::{FormConfig, FormStep};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn base(
    id: &str,
    label: &str,
    icon: &str,
    step: usize,
    order: i32,
    control: FieldControl,
) -> FormFieldInput {
    FormFieldInput {
        id: id.to_owned(),
        name: id.to_owned(),
        label: label.to_owned(),
        control,
        required: false,
        placeholder: None,
        icon: Some(icon.to_owned()),
        step,
        order,
        grid_cols: Some(GridCols::Half),
        is_urgent: false,
        is_hidden: false,
    }
}

fn required(input: FormFieldInput) -> FormFieldInput {
    FormFieldInput {
        required: true,
        ..input
    }
}

fn full_width(input: FormFieldInput) -> FormFieldInput {
    FormFieldInput {
        grid_cols: Some(GridCols::Full),
        ..input
    }
}

fn with_placeholder(input: FormFieldInput, placeholder: &str) -> FormFieldInput {
    FormFieldInput {
        placeholder: Some(placeholder.to_owned()),
        ..input
    }
}

fn select(options: &[&str]) -> FieldControl {
    FieldControl::Select {
        options: strings(options),
    }
}

fn text() -> FieldControl {
    FieldControl::Text { max_length: None }
}

fn text_limited(max_length: u32) -> FieldControl {
    FieldControl::Text {
        max_length: Some(max_length),
    }
}

fn textarea(rows: u16) -> FieldControl {
    FieldControl::Textarea {
        rows,
        max_length: None,
    }
}

fn step(id: &str, title: &str, icon: &str, color: &str, fields: Vec<FormFieldInput>) -> FormStep {
    FormStep::from_parts(
        id.to_owned(),
        title.to_owned(),
        icon.to_owned(),
        color.to_owned(),
        fields.into_iter().map(FormField::from_parts).collect(),
    )
}

fn client(id: &str, name: &str, positions: &[&str]) -> ClientConfig {
    ClientConfig::from_parts(id.to_owned(), name.to_owned(), strings(positions), true)
}

fn location(id: &str, name: &str, details: &[(&str, &[&str])]) -> LocationConfig {
    LocationConfig::from_parts(
        id.to_owned(),
        name.to_owned(),
        details
            .iter()
            .map(|(client_id, sublocations)| ((*client_id).to_owned(), strings(sublocations)))
            .collect(),
        true,
    )
}

fn default_steps() -> Vec<FormStep> {
    vec![
        step(
            "client-position",
            "Client & Posisi",
            "Building2",
            "from-blue-400 to-blue-500",
            vec![
                full_width(required(base("client", "Client", "Building2", 0, 0, select(&[])))),
                full_width(required(base(
                    "posisiDilamar",
                    "Posisi yang Dilamar",
                    "Target",
                    0,
                    1,
                    select(&[]),
                ))),
                full_width(required(base(
                    "penempatan",
                    "Lokasi Penempatan",
                    "MapPin",
                    0,
                    2,
                    select(&[]),
                ))),
                full_width(required(base(
                    "detailPenempatan",
                    "Detail Penempatan",
                    "MapPin",
                    0,
                    3,
                    select(&[]),
                ))),
            ],
        ),
        step(
            "personal-data",
            "Data Pribadi",
            "User",
            "from-purple-400 to-purple-500",
            vec![
                required(base("namaLengkap", "Nama Lengkap", "User", 1, 0, text())),
                required(base("nik", "NIK", "User", 1, 1, text_limited(16))),
                required(base("noHp", "Nomor HP", "Phone", 1, 2, FieldControl::Tel)),
                required(base("tempatLahir", "Tempat Lahir", "MapPin", 1, 3, text())),
                required(base(
                    "tanggalLahir",
                    "Tanggal Lahir",
                    "Calendar",
                    1,
                    4,
                    FieldControl::Date,
                )),
                with_placeholder(
                    base("umur", "Umur", "Calendar", 1, 5, text()),
                    "Otomatis terisi",
                ),
                required(base(
                    "jenisKelamin",
                    "Jenis Kelamin",
                    "User",
                    1,
                    6,
                    select(&["Laki-laki", "Perempuan"]),
                )),
                required(base(
                    "statusPerkawinan",
                    "Status Perkawinan",
                    "Heart",
                    1,
                    7,
                    select(&["Belum Menikah", "Menikah", "Cerai"]),
                )),
                required(base(
                    "agama",
                    "Agama",
                    "Heart",
                    1,
                    8,
                    select(&["Islam", "Kristen", "Katolik", "Hindu", "Buddha", "Konghucu"]),
                )),
                required(base("namaAyah", "Nama Ayah", "User", 1, 9, text())),
                required(base("namaIbu", "Nama Ibu", "User", 1, 10, text())),
            ],
        ),
        step(
            "address",
            "Alamat",
            "MapPin",
            "from-green-400 to-green-500",
            vec![
                full_width(required(base(
                    "alamatKtp",
                    "Alamat KTP",
                    "MapPin",
                    2,
                    0,
                    textarea(3),
                ))),
                full_width(required(base(
                    "alamatDomisili",
                    "Alamat Domisili (Tempat Tinggal Sekarang)",
                    "MapPin",
                    2,
                    1,
                    textarea(3),
                ))),
                with_placeholder(base("rtRw", "RT/RW", "MapPin", 2, 2, text()), "001/002"),
                base("nomorRumah", "Nomor Rumah", "MapPin", 2, 3, text()),
                required(base("kelurahan", "Kelurahan", "MapPin", 2, 4, text())),
                required(base("kecamatan", "Kecamatan", "MapPin", 2, 5, text())),
                required(base("kota", "Kota", "MapPin", 2, 6, text())),
                base("kodePos", "Kode Pos", "MapPin", 2, 7, text_limited(5)),
            ],
        ),
        step(
            "education",
            "Pendidikan",
            "GraduationCap",
            "from-orange-400 to-orange-500",
            vec![
                required(base(
                    "tingkatPendidikan",
                    "Tingkat Pendidikan",
                    "GraduationCap",
                    3,
                    0,
                    select(&["SMA/SMK", "D3", "S1", "S2", "S3"]),
                )),
                required(base(
                    "namaSekolah",
                    "Nama Sekolah/Universitas",
                    "GraduationCap",
                    3,
                    1,
                    text(),
                )),
                base("jurusan", "Jurusan", "GraduationCap", 3, 2, text()),
                base("tahunMasuk", "Tahun Masuk", "Calendar", 3, 3, FieldControl::Number),
                base("tahunLulus", "Tahun Lulus", "Calendar", 3, 4, FieldControl::Number),
                with_placeholder(
                    base("ipk", "IPK/Nilai Rata-rata", "GraduationCap", 3, 5, text()),
                    "3.50",
                ),
            ],
        ),
        step(
            "experience",
            "Pengalaman",
            "Briefcase",
            "from-red-400 to-red-500",
            vec![
                full_width(base(
                    "pengalamanKerja",
                    "Apakah Anda memiliki pengalaman kerja?",
                    "Briefcase",
                    4,
                    0,
                    FieldControl::Boolean,
                )),
                full_width(base(
                    "pengalamanLeasing",
                    "Apakah Anda memiliki pengalaman di bidang leasing?",
                    "Briefcase",
                    4,
                    1,
                    FieldControl::Boolean,
                )),
                base("namaPerusahaan", "Nama Perusahaan", "Building2", 4, 2, text()),
                base("posisiJabatan", "Posisi/Jabatan", "Briefcase", 4, 3, text()),
                with_placeholder(
                    base("periodeKerja", "Periode Kerja", "Calendar", 4, 4, text()),
                    "Jan 2020 - Des 2023",
                ),
                full_width(base(
                    "deskripsiTugas",
                    "Deskripsi Tugas",
                    "FileText",
                    4,
                    5,
                    textarea(3),
                )),
            ],
        ),
        step(
            "documents",
            "Dokumen",
            "FileText",
            "from-teal-400 to-teal-500",
            vec![
                base(
                    "kendaraanPribadi",
                    "Apakah Anda memiliki kendaraan pribadi?",
                    "Car",
                    5,
                    0,
                    FieldControl::Boolean,
                ),
                base(
                    "ktpAsli",
                    "Apakah Anda memiliki KTP Asli?",
                    "User",
                    5,
                    1,
                    FieldControl::Boolean,
                ),
                base(
                    "simC",
                    "Apakah Anda memiliki SIM C?",
                    "Car",
                    5,
                    2,
                    FieldControl::Boolean,
                ),
                base(
                    "simA",
                    "Apakah Anda memiliki SIM A?",
                    "Car",
                    5,
                    3,
                    FieldControl::Boolean,
                ),
                base(
                    "skck",
                    "Apakah Anda memiliki SKCK?",
                    "FileText",
                    5,
                    4,
                    FieldControl::Boolean,
                ),
                base(
                    "npwp",
                    "Apakah Anda memiliki NPWP?",
                    "CreditCard",
                    5,
                    5,
                    FieldControl::Boolean,
                ),
                full_width(base(
                    "riwayatBurukKredit",
                    "Apakah Anda memiliki riwayat buruk kredit?",
                    "CreditCard",
                    5,
                    6,
                    FieldControl::Boolean,
                )),
                full_width(required(with_placeholder(
                    base(
                        "alasanMelamar",
                        "Alasan Melamar",
                        "FileText",
                        5,
                        7,
                        FieldControl::Textarea {
                            rows: 4,
                            max_length: Some(500),
                        },
                    ),
                    "Jelaskan mengapa Anda tertarik dengan posisi ini dan perusahaan kami...",
                ))),
            ],
        ),
    ]
}

fn default_clients() -> Vec<ClientConfig> {
    vec![
        client(
            "adira",
            "ADIRA",
            &[
                "Sales Officer - CMO",
                "Collection Remedial Officer",
                "Relationship Officer (RO)",
                "CUSTOMER SERVICE STAFF",
                "DATA ADMIN STAFF",
                "GENERAL ADMIN STAFF",
                "TELLER",
                "CLUSTER COLLECTION SUPPORT",
                "REGIONAL COLLECTION SUPPORT",
                "REGIONAL CREDIT ADMIN",
                "REGIONAL CREDIT SUPPORT",
                "REGIONAL TELESURVEYOR",
                "AREA RECOVERY ADMIN",
                "COLLATERAL STAFF",
                "PAYMENT PROCESSOR STAFF",
                "REGIONAL MESSENGER STAFF",
                "WAREHOUSE STAFF",
                "MKT ADMIN",
            ],
        ),
        client(
            "sms",
            "SMS",
            &[
                "Sales Officer - CMO",
                "Collection Remedial Officer",
                "Relationship Officer (RO)",
                "CUSTOMER SERVICE STAFF",
            ],
        ),
        client(
            "wom",
            "WOM",
            &[
                "Sales Officer - CMO",
                "Collection Remedial Officer",
                "CUSTOMER SERVICE STAFF",
            ],
        ),
        client(
            "fif",
            "FIF",
            &[
                "Sales Officer - CMO",
                "Collection Remedial Officer",
                "CUSTOMER SERVICE STAFF",
            ],
        ),
    ]
}

fn default_locations() -> Vec<LocationConfig> {
    vec![
        location(
            "jakarta",
            "JAKARTA",
            &[
                (
                    "adira",
                    &[
                        "ADIRA TEBET MOTOR",
                        "ADIRA TEBET MOBIL",
                        "ADIRA KELAPA GADING MOTOR",
                        "ADIRA KELAPA GADING MOBIL",
                        "ADIRA BACK OFFICE JAKARTA",
                    ],
                ),
                (
                    "sms",
                    &[
                        "SMS FINANCE JAKARTA TIMUR",
                        "SMS FINANCE JAKARTA UTARA",
                        "SMS FINANCE JAKARTA SELATAN",
                    ],
                ),
                ("wom", &["WOM FINANCE JAKARTA PUSAT", "WOM FINANCE JAKARTA BARAT"]),
                ("fif", &["FIF GROUP JAKARTA PUSAT", "FIF GROUP JAKARTA TIMUR"]),
            ],
        ),
        location(
            "bogor",
            "BOGOR",
            &[
                ("adira", &["ADIRA BOGOR MOTOR", "ADIRA BOGOR MOBIL"]),
                ("sms", &["SMS FINANCE BOGOR"]),
                ("wom", &["WOM FINANCE BOGOR"]),
                ("fif", &["FIF GROUP BOGOR"]),
            ],
        ),
        location(
            "depok",
            "DEPOK",
            &[
                ("adira", &["ADIRA DEPOK MOTOR", "ADIRA DEPOK MOBIL"]),
                ("sms", &["SMS FINANCE DEPOK"]),
                ("wom", &["WOM FINANCE DEPOK"]),
                ("fif", &["FIF GROUP DEPOK"]),
            ],
        ),
        location(
            "bekasi",
            "BEKASI",
            &[
                (
                    "adira",
                    &["ADIRA BEKASI MOTOR", "ADIRA BEKASI MOBIL", "ADIRA PONDOK GEDE"],
                ),
                ("sms", &["SMS FINANCE BEKASI"]),
                ("wom", &["WOM FINANCE BEKASI"]),
                ("fif", &["FIF GROUP BEKASI"]),
            ],
        ),
        location(
            "tangerang",
            "TANGERANG",
            &[
                (
                    "adira",
                    &["ADIRA TANGERANG MOTOR", "ADIRA TANGERANG MOBIL", "ADIRA KETAPANG"],
                ),
                ("sms", &["SMS FINANCE TANGERANG"]),
                ("wom", &["WOM FINANCE TANGERANG"]),
                ("fif", &["FIF GROUP TANGERANG"]),
            ],
        ),
    ]
}

fn default_position_placements() -> BTreeMap<String, Vec<String>> {
    let back_office = &["ADIRA BACK OFFICE JAKARTA"][..];
    let entries: &[(&str, &[&str])] = &[
        (
            "Sales Officer - CMO",
            &[
                "ADIRA TEBET MOTOR",
                "ADIRA KELAPA GADING MOTOR",
                "ADIRA TEBET MOBIL",
                "ADIRA KELAPA GADING MOBIL",
                "ADIRA BACK OFFICE JAKARTA",
                "ADIRA BOGOR MOTOR",
                "ADIRA DEPOK MOTOR",
                "ADIRA BEKASI MOTOR",
                "ADIRA TANGERANG MOTOR",
            ],
        ),
        (
            "Collection Remedial Officer",
            &[
                "ADIRA BACK OFFICE JAKARTA",
                "SMS FINANCE JAKARTA TIMUR",
                "WOM FINANCE JAKARTA PUSAT",
                "FIF GROUP JAKARTA PUSAT",
            ],
        ),
        (
            "Relationship Officer (RO)",
            &[
                "ADIRA BACK OFFICE JAKARTA",
                "SMS FINANCE JAKARTA TIMUR",
                "WOM FINANCE JAKARTA PUSAT",
            ],
        ),
        ("CUSTOMER SERVICE STAFF", back_office),
        ("DATA ADMIN STAFF", back_office),
        ("GENERAL ADMIN STAFF", back_office),
        ("TELLER", back_office),
        ("CLUSTER COLLECTION SUPPORT", back_office),
        ("REGIONAL COLLECTION SUPPORT", back_office),
        ("REGIONAL CREDIT ADMIN", back_office),
        ("REGIONAL CREDIT SUPPORT", back_office),
        ("REGIONAL TELESURVEYOR", back_office),
        ("AREA RECOVERY ADMIN", back_office),
        ("COLLATERAL STAFF", back_office),
        ("PAYMENT PROCESSOR STAFF", back_office),
        ("REGIONAL MESSENGER STAFF", back_office),
        ("WAREHOUSE STAFF", back_office),
        ("MKT ADMIN", back_office),
    ];

    entries
        .iter()
        .map(|(position, placements)| ((*position).to_owned(), strings(placements)))
        .collect()
}

/// Returns the built-in default configuration document.
#[must_use]
pub fn default_form_config() -> FormConfig {
    FormConfig::from_parts(
        default_steps(),
        default_clients(),
        default_locations(),
        default_position_placements(),
    )
}

/// Returns the built-in sample application records used to seed dev entries.
#[must_use]
pub fn sample_records() -> Vec<FormRecord> {
    let templates = [
        json!({
            "client": "ADIRA",
            "posisiDilamar": "Sales Officer - CMO",
            "penempatan": "JAKARTA",
            "detailPenempatan": "ADIRA TEBET MOTOR",
            "namaLengkap": "John Doe",
            "nik": "3171234567890001",
            "noHp": "081234567890",
            "tempatLahir": "Jakarta",
            "tanggalLahir": "1990-01-15",
            "umur": "34",
            "jenisKelamin": "Laki-laki",
            "statusPerkawinan": "Menikah",
            "agama": "Islam",
            "namaAyah": "John Senior",
            "namaIbu": "Jane Doe",
            "alamatKtp": "Jl. Sudirman No. 123, RT 001/002",
            "alamatDomisili": "Jl. Sudirman No. 123, RT 001/002",
            "rtRw": "001/002",
            "nomorRumah": "123",
            "kelurahan": "Karet Tengsin",
            "kecamatan": "Tanah Abang",
            "kota": "Jakarta Pusat",
            "kodePos": "10220",
            "tingkatPendidikan": "S1",
            "namaSekolah": "Universitas Indonesia",
            "jurusan": "Ekonomi",
            "tahunMasuk": "2008",
            "tahunLulus": "2012",
            "ipk": "3.5",
            "pengalamanKerja": true,
            "pengalamanLeasing": true,
            "namaPerusahaan": "PT. Finance Indonesia",
            "posisiJabatan": "Sales Executive",
            "periodeKerja": "Jan 2020 - Des 2023",
            "deskripsiTugas": "Melakukan penjualan produk pembiayaan kendaraan",
            "kendaraanPribadi": true,
            "ktpAsli": true,
            "simC": true,
            "simA": false,
            "skck": true,
            "npwp": true,
            "riwayatBurukKredit": false,
            "alasanMelamar": "Tertarik dengan perusahaan yang memiliki reputasi baik dan ingin mengembangkan karir di bidang finance.",
        }),
        json!({
            "client": "SMS",
            "posisiDilamar": "Collection Remedial Officer",
            "penempatan": "JAKARTA",
            "detailPenempatan": "SMS FINANCE JAKARTA TIMUR",
            "namaLengkap": "Sarah Wilson",
            "nik": "3172345678900002",
            "noHp": "082345678901",
            "tempatLahir": "Bandung",
            "tanggalLahir": "1992-05-20",
            "umur": "32",
            "jenisKelamin": "Perempuan",
            "statusPerkawinan": "Belum Menikah",
            "agama": "Kristen",
            "namaAyah": "Robert Wilson",
            "namaIbu": "Maria Wilson",
            "alamatKtp": "Jl. Gatot Subroto No. 456, RT 003/004",
            "alamatDomisili": "Jl. Gatot Subroto No. 456, RT 003/004",
            "rtRw": "003/004",
            "nomorRumah": "456",
            "kelurahan": "Kuningan Timur",
            "kecamatan": "Setiabudi",
            "kota": "Jakarta Selatan",
            "kodePos": "12950",
            "tingkatPendidikan": "D3",
            "namaSekolah": "Politeknik Negeri Bandung",
            "jurusan": "Akuntansi",
            "tahunMasuk": "2010",
            "tahunLulus": "2013",
            "ipk": "3.7",
            "pengalamanKerja": true,
            "pengalamanLeasing": false,
            "namaPerusahaan": "PT. Collection Services",
            "posisiJabatan": "Collection Officer",
            "periodeKerja": "Mar 2021 - Nov 2023",
            "deskripsiTugas": "Menangani penagihan kredit bermasalah dan negosiasi dengan nasabah",
            "kendaraanPribadi": false,
            "ktpAsli": true,
            "simC": true,
            "simA": false,
            "skck": true,
            "npwp": true,
            "riwayatBurukKredit": false,
            "alasanMelamar": "Memiliki pengalaman di bidang collection dan ingin bergabung dengan perusahaan yang lebih besar.",
        }),
    ];

    templates
        .into_iter()
        .filter_map(|template| FormRecord::new(template).ok())
        .collect()
}
