use httpmock::prelude::*;
use locus_client::{ClientError, EutilsClient};
use locus_core::domain::gene::GeneBounds;
use locus_core::domain::variant::ClinicalSignificance;
use serde_json::json;

#[tokio::test]
async fn test_gene_details_normalizes_summary() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/esummary.fcgi")
            .query_param("db", "gene")
            .query_param("id", "672")
            .query_param("retmode", "json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "header": {"type": "esummary", "version": "0.3"},
                "result": {
                    "uids": ["672"],
                    "672": {
                        "uid": "672",
                        "name": "BRCA1",
                        "description": "BRCA1 DNA repair associated",
                        "chromosome": "17",
                        "maplocation": "17q21.31",
                        "summary": "This gene encodes a 190 kD nuclear phosphoprotein.",
                        "organism": {
                            "scientificname": "Homo sapiens",
                            "commonname": "human",
                            "taxid": 9606
                        },
                        "genomicinfo": [{
                            "chrloc": "17",
                            "chraccver": "NC_000017.11",
                            "chrstart": 43_125_363_u64,
                            "chrstop": 43_044_294_u64,
                            "exoncount": 24
                        }]
                    }
                }
            }));
    });

    let client = EutilsClient::new(server.base_url());
    let details = client.gene_details("672").await.unwrap();
    mock.assert();

    assert_eq!(details.gene_id, "672");
    assert_eq!(details.symbol, "BRCA1");
    assert_eq!(details.chromosome, "17");
    assert_eq!(details.map_location, "17q21.31");
    // Minus-strand gene: esummary reports start > stop, bounds flip them
    assert_eq!(details.bounds, Some(GeneBounds::new(43_044_294, 43_125_363)));
    assert_eq!(details.accession.as_deref(), Some("NC_000017.11"));
    assert_eq!(details.exon_count, Some(24));
    let organism = details.organism.unwrap();
    assert_eq!(organism.scientific_name, "Homo sapiens");
    assert_eq!(organism.tax_id, 9606);
}

#[tokio::test]
async fn test_gene_details_without_genomicinfo() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esummary.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": {
                    "uids": ["7157"],
                    "7157": {
                        "uid": "7157",
                        "name": "TP53",
                        "description": "tumor protein p53",
                        "chromosome": "17",
                        "maplocation": "17p13.1"
                    }
                }
            }));
    });

    let client = EutilsClient::new(server.base_url());
    let details = client.gene_details("7157").await.unwrap();

    assert_eq!(details.symbol, "TP53");
    assert_eq!(details.summary, "");
    assert!(details.bounds.is_none());
    assert!(details.organism.is_none());
    assert!(details.exon_count.is_none());
}

#[tokio::test]
async fn test_gene_details_unknown_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esummary.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": {
                    "uids": [],
                    "999999999": {"error": "cannot get document summary"}
                }
            }));
    });

    let client = EutilsClient::new(server.base_url());
    let err = client.gene_details("999999999").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_gene_details_missing_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esummary.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"result": {"uids": []}}));
    });

    let client = EutilsClient::new(server.base_url());
    let err = client.gene_details("672").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_clinvar_variants_end_to_end() {
    let server = MockServer::start();
    let search_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/esearch.fcgi")
            .query_param("db", "clinvar")
            .query_param("term", "\"BRCA1\"[gene]")
            .query_param("retmode", "json")
            .query_param("retmax", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "esearchresult": {
                    "count": "14822",
                    "retmax": "2",
                    "idlist": ["55601", "17662"]
                }
            }));
    });
    let summary_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/esummary.fcgi")
            .query_param("db", "clinvar")
            .query_param("id", "55601,17662")
            .query_param("retmode", "json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": {
                    "uids": ["55601", "17662"],
                    "55601": {
                        "uid": "55601",
                        "accession": "VCV000055601",
                        "title": "NM_007294.4(BRCA1):c.5074G>A (p.Asp1692Asn)",
                        "obj_type": "single nucleotide variant",
                        "germline_classification": {
                            "description": "Pathogenic",
                            "last_evaluated": "2024/01/05 00:00",
                            "review_status": "reviewed by expert panel"
                        },
                        "gene_sort": "BRCA1",
                        "variation_set": [{
                            "variation_loc": [
                                {"assembly_name": "GRCh38", "chr": "17", "start": "43067646"},
                                {"assembly_name": "GRCh37", "chr": "17", "start": "41219663"}
                            ]
                        }]
                    },
                    "17662": {
                        "uid": "17662",
                        "accession": "VCV000017662",
                        "title": "NM_007294.4(BRCA1):c.68_69del (p.Glu23fs)",
                        "obj_type": "Deletion",
                        "germline_classification": {
                            "description": "Pathogenic",
                            "last_evaluated": "2023/12/16",
                            "review_status": "reviewed by expert panel"
                        },
                        "gene_sort": "BRCA1",
                        "variation_set": [{
                            "variation_loc": [
                                {"assembly_name": "GRCh38", "chr": "17", "start": 43_124_027_u64}
                            ]
                        }]
                    }
                }
            }));
    });

    let client = EutilsClient::new(server.base_url());
    let variants = client.clinvar_variants("BRCA1", "hg38", 2).await.unwrap();
    search_mock.assert();
    summary_mock.assert();

    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].uid, "55601");
    assert_eq!(variants[0].significance, ClinicalSignificance::Pathogenic);
    assert!(variants[0].is_snv());
    assert_eq!(
        variants[0].location.as_ref().unwrap().position,
        43_067_646
    );
    assert_eq!(
        variants[0].alleles.map(|a| a.to_string()),
        Some("G>A".to_string())
    );
    assert_eq!(variants[1].uid, "17662");
    assert!(!variants[1].is_snv());
    assert!(variants[1].alleles.is_none());
}

#[tokio::test]
async fn test_clinvar_variants_uses_grch37_for_hg19() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esearch.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"esearchresult": {"idlist": ["55601"]}}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/esummary.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": {
                    "uids": ["55601"],
                    "55601": {
                        "title": "NM_007294.4(BRCA1):c.5074G>A (p.Asp1692Asn)",
                        "obj_type": "single nucleotide variant",
                        "variation_set": [{
                            "variation_loc": [
                                {"assembly_name": "GRCh38", "chr": "17", "start": "43067646"},
                                {"assembly_name": "GRCh37", "chr": "17", "start": "41219663"}
                            ]
                        }]
                    }
                }
            }));
    });

    let client = EutilsClient::new(server.base_url());
    let variants = client.clinvar_variants("BRCA1", "hg19", 1).await.unwrap();

    assert_eq!(variants.len(), 1);
    assert_eq!(
        variants[0].location.as_ref().unwrap().position,
        41_219_663
    );
}

#[tokio::test]
async fn test_clinvar_variants_empty_search_skips_summary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esearch.fcgi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"esearchresult": {"idlist": []}}));
    });
    let summary_mock = server.mock(|when, then| {
        when.method(GET).path("/esummary.fcgi");
        then.status(200);
    });

    let client = EutilsClient::new(server.base_url());
    let variants = client
        .clinvar_variants("NOSUCHGENE", "hg38", 20)
        .await
        .unwrap();

    assert!(variants.is_empty());
    summary_mock.assert_hits(0);
}
